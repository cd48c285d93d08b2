//! Confirmation lines printed after a mutation

use crate::models::{Entry, Money};

/// Format the confirmation for a saved income entry
pub fn format_income_saved(entry: &Entry) -> String {
    format!(
        "Saved income: {} on {} ({})",
        entry.amount, entry.entry_date, entry.description
    )
}

/// Format the confirmation for a saved expense entry
pub fn format_expense_saved(entry: &Entry) -> String {
    let category_info = entry
        .category()
        .map(|c| format!(" [{}]", c))
        .unwrap_or_default();

    format!(
        "Saved expense: {} on {}{} ({})",
        entry.amount, entry.entry_date, category_info, entry.description
    )
}

/// Format the confirmation for a budget limit
pub fn format_budget_set(category: &str, amount: Money) -> String {
    format!("Budget for '{}' set to {}", category, amount)
}
