//! Entry model
//!
//! A single income or expense record. Which list an entry lives in decides its
//! role; the entry itself carries no income/expense flag.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::money::Money;

/// One income or expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Amount (sign is not interpreted)
    pub amount: Money,

    /// Free-text description
    pub description: String,

    /// Date the entry applies to, stored as `YYYY-MM-DD`
    pub entry_date: NaiveDate,

    /// Expense category. Stored as an empty string when absent.
    #[serde(
        default,
        serialize_with = "serialize_category",
        deserialize_with = "deserialize_category"
    )]
    pub category: Option<String>,
}

impl Entry {
    /// Create a new entry, normalizing an empty category to `None`
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        entry_date: NaiveDate,
        category: Option<String>,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            entry_date,
            category: category.filter(|c| !c.is_empty()),
        }
    }

    /// Create an income entry (no category)
    pub fn income(amount: Money, description: impl Into<String>, entry_date: NaiveDate) -> Self {
        Self::new(amount, description, entry_date, None)
    }

    /// Create an expense entry
    pub fn expense(
        amount: Money,
        description: impl Into<String>,
        entry_date: NaiveDate,
        category: Option<String>,
    ) -> Self {
        Self::new(amount, description, entry_date, category)
    }

    /// The category name, if any
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

fn serialize_category<S>(category: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(category.as_deref().unwrap_or(""))
}

fn deserialize_category<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|c| !c.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_income_has_no_category() {
        let entry = Entry::income(Money::new(dec!(1500)), "salary", march(5));
        assert_eq!(entry.category(), None);
        assert_eq!(entry.description, "salary");
    }

    #[test]
    fn test_empty_category_normalized() {
        let entry = Entry::expense(Money::new(dec!(3)), "coffee", march(1), Some(String::new()));
        assert_eq!(entry.category, None);
    }

    #[test]
    fn test_serialize_shape() {
        let entry = Entry::expense(
            Money::new(dec!(200)),
            "week1",
            march(10),
            Some("groceries".into()),
        );
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({
                "amount": 200,
                "description": "week1",
                "entry_date": "2024-03-10",
                "category": "groceries"
            })
        );
    }

    #[test]
    fn test_absent_category_serializes_as_empty_string() {
        let entry = Entry::income(Money::new(dec!(1)), "gift", march(2));
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["category"], json!(""));
    }

    #[test]
    fn test_deserialize_empty_or_missing_category() {
        let empty: Entry = serde_json::from_value(json!({
            "amount": 5, "description": "x", "entry_date": "2024-03-01", "category": ""
        }))
        .unwrap();
        assert_eq!(empty.category, None);

        let missing: Entry = serde_json::from_value(json!({
            "amount": 5, "description": "x", "entry_date": "2024-03-01"
        }))
        .unwrap();
        assert_eq!(missing.category, None);

        let null: Entry = serde_json::from_value(json!({
            "amount": 5, "description": "x", "entry_date": "2024-03-01", "category": null
        }))
        .unwrap();
        assert_eq!(null.category, None);
    }

    #[test]
    fn test_deserialize_rejects_bad_date_and_missing_amount() {
        let bad_date = serde_json::from_value::<Entry>(json!({
            "amount": 5, "description": "x", "entry_date": "2024-02-30"
        }));
        assert!(bad_date.is_err());

        let no_amount = serde_json::from_value::<Entry>(json!({
            "description": "x", "entry_date": "2024-03-01"
        }));
        assert!(no_amount.is_err());
    }
}
