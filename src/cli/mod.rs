//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the data model and storage.

pub mod budget;
pub mod entry;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::error::BudgetResult;
use crate::models::Money;
use crate::storage::Storage;

pub use budget::{handle_set_budget, handle_summary};
pub use entry::{handle_add_expense, handle_add_income};

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record an income entry
    #[command(allow_negative_numbers = true)]
    AddIncome {
        /// Amount of the entry
        amount: Money,
        /// Short description
        description: String,
        /// Entry date in YYYY-MM-DD (defaults to today)
        #[arg(long = "date", value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },

    /// Record an expense entry
    #[command(allow_negative_numbers = true)]
    AddExpense {
        /// Amount of the entry
        amount: Money,
        /// Short description
        description: String,
        /// Expense category
        #[arg(long)]
        category: Option<String>,
        /// Entry date in YYYY-MM-DD (defaults to today)
        #[arg(long = "date", value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },

    /// Set monthly budget for a category
    #[command(allow_negative_numbers = true)]
    SetBudget {
        /// Budget category name
        category: String,
        /// Monthly budget amount
        amount: Money,
    },

    /// Show summary for a month
    Summary {
        /// Month in YYYY-MM format
        month: String,
    },
}

/// Run one command against the data file
pub fn handle_command(storage: &Storage, cmd: Commands) -> BudgetResult<()> {
    match cmd {
        Commands::AddIncome {
            amount,
            description,
            date,
        } => {
            handle_add_income(storage, amount, description, date)?;
        }
        Commands::AddExpense {
            amount,
            description,
            category,
            date,
        } => {
            handle_add_expense(storage, amount, description, category, date)?;
        }
        Commands::SetBudget { category, amount } => {
            handle_set_budget(storage, category, amount)?;
        }
        Commands::Summary { month } => {
            handle_summary(storage, &month)?;
        }
    }
    Ok(())
}

/// Today's local date, used when `--date` is omitted
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
