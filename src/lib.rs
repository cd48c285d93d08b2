//! budget - a command-line monthly budgeting helper
//!
//! Records income and expense entries, keeps a monthly limit per expense
//! category, and summarizes any calendar month. Everything is stored in a
//! single JSON document on local disk.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file path resolution
//! - `error`: Custom error types
//! - `models`: Entries, budgets and the monthly summary
//! - `storage`: JSON file storage layer
//! - `display`: Text formatting for terminal output
//! - `cli`: Command definitions and handlers
//! - `log`: Tracing subscriber setup for the binary
//!
//! # Example
//!
//! ```rust
//! use budget::models::{BudgetData, Entry, Money};
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let mut data = BudgetData::new();
//! let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
//! data.add_income(Entry::income(Money::new(Decimal::new(150000, 2)), "salary", day));
//! data.set_budget("groceries", Money::new(Decimal::new(250, 0)));
//!
//! let summary = data.monthly_summary("2024-03");
//! assert_eq!(summary.net.to_string(), "1500.00");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod log;
pub mod models;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
