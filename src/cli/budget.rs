//! Budget CLI commands
//!
//! Setting per-category limits and printing the monthly summary.

use tracing::{info, warn};

use crate::display::{format_budget_set, format_summary};
use crate::error::BudgetResult;
use crate::models::{Money, Month, MonthlySummary};
use crate::storage::Storage;

/// Set the monthly limit for a category and save
pub fn handle_set_budget(storage: &Storage, category: String, amount: Money) -> BudgetResult<()> {
    let mut data = storage.load()?;

    if let Some(previous) = data.budget_for(&category) {
        info!(%category, %previous, %amount, "Replacing budget");
    } else {
        info!(%category, %amount, "Setting budget");
    }

    data.set_budget(category.as_str(), amount);
    storage.save(&data)?;

    println!("{}", format_budget_set(&category, amount));
    Ok(())
}

/// Print the summary for a `YYYY-MM` month
///
/// An unparsable month is not an error; it simply matches no entries.
pub fn handle_summary(storage: &Storage, month: &str) -> BudgetResult<MonthlySummary> {
    let data = storage.load()?;

    if let Err(e) = Month::parse(month) {
        warn!(error = %e, "Month matches no entries");
    }

    let summary = data.monthly_summary(month);
    print!("{}", format_summary(month, &summary));
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::entry::handle_add_expense;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("budget_data.json"));
        (temp_dir, storage)
    }

    #[test]
    fn test_set_budget_overwrites() {
        let (_temp_dir, storage) = create_test_storage();

        handle_set_budget(&storage, "groceries".into(), Money::new(dec!(250))).unwrap();
        handle_set_budget(&storage, "groceries".into(), Money::new(dec!(300))).unwrap();

        let data = storage.load().unwrap();
        assert_eq!(data.budgets.len(), 1);
        assert_eq!(data.budget_for("groceries"), Some(Money::new(dec!(300))));
    }

    #[test]
    fn test_summary_does_not_modify_file() {
        let (_temp_dir, storage) = create_test_storage();
        handle_set_budget(&storage, "fuel".into(), Money::new(dec!(80))).unwrap();
        handle_add_expense(
            &storage,
            Money::new(dec!(30)),
            "tank".into(),
            Some("fuel".into()),
            NaiveDate::from_ymd_opt(2024, 7, 4),
        )
        .unwrap();

        let before = std::fs::read_to_string(storage.path()).unwrap();
        let summary = handle_summary(&storage, "2024-07").unwrap();
        let after = std::fs::read_to_string(storage.path()).unwrap();

        assert_eq!(before, after);
        assert_eq!(summary.remaining_by_category["fuel"], Money::new(dec!(50)));
    }

    #[test]
    fn test_summary_with_malformed_month() {
        let (_temp_dir, storage) = create_test_storage();
        let summary = handle_summary(&storage, "July").unwrap();
        assert_eq!(summary, MonthlySummary::default());
    }
}
