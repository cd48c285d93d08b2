//! Configuration module
//!
//! There is no settings file; the only configurable input is where the data
//! file lives.

pub mod paths;

pub use paths::{default_data_file, resolve_data_file, DATA_FILE_ENV};
