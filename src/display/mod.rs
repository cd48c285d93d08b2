//! Display formatting for terminal output
//!
//! Pure functions returning strings; printing is left to the CLI handlers.

pub mod entry;
pub mod report;

pub use entry::{format_budget_set, format_expense_saved, format_income_saved};
pub use report::format_summary;
