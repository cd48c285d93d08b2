//! Income and expense CLI commands

use chrono::NaiveDate;
use tracing::info;

use crate::display::{format_expense_saved, format_income_saved};
use crate::error::BudgetResult;
use crate::models::{Entry, Money};
use crate::storage::Storage;

use super::today;

/// Append an income entry and save
pub fn handle_add_income(
    storage: &Storage,
    amount: Money,
    description: String,
    date: Option<NaiveDate>,
) -> BudgetResult<Entry> {
    let mut data = storage.load()?;

    let entry = Entry::income(amount, description, date.unwrap_or_else(today));
    data.add_income(entry.clone());
    storage.save(&data)?;

    info!(amount = %entry.amount, date = %entry.entry_date, "Recorded income");
    println!("{}", format_income_saved(&entry));
    Ok(entry)
}

/// Append an expense entry and save
pub fn handle_add_expense(
    storage: &Storage,
    amount: Money,
    description: String,
    category: Option<String>,
    date: Option<NaiveDate>,
) -> BudgetResult<Entry> {
    let mut data = storage.load()?;

    let entry = Entry::expense(amount, description, date.unwrap_or_else(today), category);
    data.add_expense(entry.clone());
    storage.save(&data)?;

    info!(
        amount = %entry.amount,
        date = %entry.entry_date,
        category = entry.category().unwrap_or(""),
        "Recorded expense"
    );
    println!("{}", format_expense_saved(&entry));
    Ok(entry)
}
