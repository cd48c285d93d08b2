//! Budget data aggregate
//!
//! Holds every income and expense entry plus the per-category monthly limits,
//! and computes monthly summaries over them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entry::Entry;
use super::money::Money;
use super::period::Month;
use super::summary::MonthlySummary;

/// All budgeting information, as stored in the data file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetData {
    pub income: Vec<Entry>,
    pub expenses: Vec<Entry>,
    /// Monthly limit per category name
    pub budgets: BTreeMap<String, Money>,
}

impl BudgetData {
    /// Create an empty data set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_income(&mut self, entry: Entry) {
        self.income.push(entry);
    }

    pub fn add_expense(&mut self, entry: Entry) {
        self.expenses.push(entry);
    }

    /// Set the monthly limit for a category, replacing any previous value
    pub fn set_budget(&mut self, category: impl Into<String>, amount: Money) {
        self.budgets.insert(category.into(), amount);
    }

    pub fn budget_for(&self, category: &str) -> Option<Money> {
        self.budgets.get(category).copied()
    }

    /// Summarize a month given as `YYYY-MM`
    ///
    /// A key that does not parse as a month matches no entries, so the result
    /// has zero totals and only the configured budgets as remaining amounts.
    /// Totals saturate at the `Decimal` bounds rather than overflowing.
    pub fn monthly_summary(&self, month: &str) -> MonthlySummary {
        let month = Month::parse(month).ok();
        let in_month =
            |entry: &Entry| month.is_some_and(|m| m.contains(entry.entry_date));

        let income_total: Money = self
            .income
            .iter()
            .filter(|e| in_month(*e))
            .map(|e| e.amount)
            .sum();

        let mut expense_total = Money::zero();
        let mut category_spend: BTreeMap<String, Money> = BTreeMap::new();
        for entry in self.expenses.iter().filter(|e| in_month(*e)) {
            expense_total += entry.amount;
            if let Some(category) = entry.category() {
                *category_spend.entry(category.to_string()).or_default() += entry.amount;
            }
        }

        let remaining_by_category = self
            .budgets
            .iter()
            .map(|(category, limit)| {
                let spent = category_spend.get(category).copied().unwrap_or_default();
                (category.clone(), *limit - spent)
            })
            .collect();

        MonthlySummary {
            income_total,
            expense_total,
            net: income_total - expense_total,
            category_spend,
            remaining_by_category,
        }
    }
}
