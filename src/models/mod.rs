//! Core data models
//!
//! Entries, budget limits and the monthly summary computed from them.

pub mod budget;
pub mod entry;
pub mod money;
pub mod period;
pub mod summary;

pub use budget::BudgetData;
pub use entry::Entry;
pub use money::{Money, MoneyParseError};
pub use period::{Month, MonthParseError};
pub use summary::MonthlySummary;
