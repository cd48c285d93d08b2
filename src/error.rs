//! Custom error types for the budget tool
//!
//! The data model itself never fails; errors come from resolving the data
//! file location and from reading or writing it.

use thiserror::Error;

/// The main error type for budget operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage errors (unreadable, unwritable or structurally invalid data file)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// Result type alias for budget operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("no home directory".into());
        assert_eq!(err.to_string(), "Configuration error: no home directory");
        assert!(!err.is_storage());
    }

    #[test]
    fn test_storage_error() {
        let err = BudgetError::Storage("Failed to parse budget.json".into());
        assert_eq!(err.to_string(), "Storage error: Failed to parse budget.json");
        assert!(err.is_storage());
    }
}
