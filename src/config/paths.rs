//! Path management for the budget data file
//!
//! ## Path Resolution Order
//!
//! 1. `--data-file` on the command line
//! 2. `BUDGET_DATA_FILE` environment variable
//! 3. `<home>/.budget/budget_data.json`
//!
//! The first two are handled by clap; this module supplies the fallback.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::BudgetError;

/// Environment variable that overrides the data file location
pub const DATA_FILE_ENV: &str = "BUDGET_DATA_FILE";

/// Directory under the home directory holding the data file
pub const DATA_DIR_NAME: &str = ".budget";

/// File name of the data file
pub const DATA_FILE_NAME: &str = "budget_data.json";

/// Default data file inside a given home directory
pub fn data_file_in(home: &Path) -> PathBuf {
    home.join(DATA_DIR_NAME).join(DATA_FILE_NAME)
}

/// Default data file in the current user's home directory
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_file() -> Result<PathBuf, BudgetError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| BudgetError::Config("Could not determine home directory".into()))?;
    Ok(data_file_in(dirs.home_dir()))
}

/// Use the explicit path if one was given, else the default
pub fn resolve_data_file(explicit: Option<PathBuf>) -> Result<PathBuf, BudgetError> {
    match explicit {
        Some(path) => Ok(path),
        None => default_data_file(),
    }
}
