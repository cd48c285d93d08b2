//! Calendar month keys
//!
//! Summaries are requested for a month written as `YYYY-MM`. The key is parsed
//! into integers once, and dates are matched on their year and month fields.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A calendar month (e.g., "2024-03")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month, returning `None` when `month` is outside 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Parse a `YYYY-MM` key
    ///
    /// The year must be four digits and the month two digits between 01 and 12.
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let invalid = || MonthParseError::InvalidFormat(s.to_string());

        let (year_part, month_part) = s.split_once('-').ok_or_else(invalid)?;

        let all_digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !all_digits(year_part, 4) || !all_digits(month_part, 2) {
            return Err(invalid());
        }

        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;

        Self::new(year, month).ok_or_else(invalid)
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month '{}', expected YYYY-MM", s)
            }
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid() {
        let month = Month::parse("2024-03").unwrap();
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 3);

        assert_eq!("1999-12".parse::<Month>().unwrap(), Month::new(1999, 12).unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        for bad in [
            "", "2024", "2024-3", "2024-13", "2024-00", "24-03", "2024/03", "2024-03-01",
            "abcd-ef", "-2024-03", " 2024-03",
        ] {
            assert!(Month::parse(bad).is_err(), "expected '{}' to be rejected", bad);
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Month::new(2024, 0).is_none());
        assert!(Month::new(2024, 13).is_none());
        assert!(Month::new(2024, 1).is_some());
    }

    #[test]
    fn test_contains_month_boundaries() {
        let march = Month::parse("2024-03").unwrap();
        assert!(march.contains(date(2024, 3, 1)));
        assert!(march.contains(date(2024, 3, 31)));
        assert!(!march.contains(date(2024, 2, 29)));
        assert!(!march.contains(date(2024, 4, 1)));
        assert!(!march.contains(date(2023, 3, 15)));
    }

    #[test]
    fn test_display_round_trip() {
        let month = Month::new(2025, 1).unwrap();
        assert_eq!(month.to_string(), "2025-01");
        assert_eq!(Month::parse(&month.to_string()).unwrap(), month);
    }

    #[test]
    fn test_error_message() {
        let err = Month::parse("March").unwrap_err();
        assert_eq!(err.to_string(), "Invalid month 'March', expected YYYY-MM");
    }
}
