//! Storage layer
//!
//! The whole data set lives in one pretty-printed JSON document. A missing
//! file is created empty on first access; a present but malformed file is an
//! error and is never overwritten by a load.

pub mod file_io;

pub use file_io::{read_json_required, write_json_atomic};

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::BudgetResult;
use crate::models::BudgetData;

/// Reads and writes `BudgetData` at a fixed path
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Create a storage handle for the given data file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the data file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the data file exists, writing an empty document if it doesn't
    pub fn ensure_data_file(&self) -> BudgetResult<&Path> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Creating empty data file");
            file_io::ensure_parent_dir(&self.path)?;
            write_json_atomic(&self.path, &BudgetData::new())?;
        }
        Ok(&self.path)
    }

    /// Load the data set from disk
    pub fn load(&self) -> BudgetResult<BudgetData> {
        let path = self.ensure_data_file()?;
        let data: BudgetData = read_json_required(path)?;
        debug!(
            path = %path.display(),
            income = data.income.len(),
            expenses = data.expenses.len(),
            budgets = data.budgets.len(),
            "Loaded budget data"
        );
        Ok(data)
    }

    /// Save the data set to disk
    pub fn save(&self, data: &BudgetData) -> BudgetResult<()> {
        let path = self.ensure_data_file()?;
        write_json_atomic(path, data)?;
        debug!(path = %path.display(), "Saved budget data");
        Ok(())
    }
}
