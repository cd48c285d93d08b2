//! Monthly summary result

use std::collections::BTreeMap;

use super::money::Money;

/// Aggregated figures for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthlySummary {
    pub income_total: Money,
    pub expense_total: Money,
    /// Always `income_total - expense_total`
    pub net: Money,
    /// Spend per category; uncategorized expenses are not listed
    pub category_spend: BTreeMap<String, Money>,
    /// Budget minus spend, for every category that has a budget
    pub remaining_by_category: BTreeMap<String, Money>,
}
