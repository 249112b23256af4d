//! Custom error types for splitbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for splitbook operations
#[derive(Error, Debug)]
pub enum SplitbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// A plan snapshot failed to load or parse
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// A snapshot failed write-path validation
    #[error("Snapshot has {0} validation error(s)")]
    InvalidSnapshot(usize),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

// Implement From traits for common error types

impl From<std::io::Error> for SplitbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for SplitbookError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for SplitbookError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for splitbook operations
pub type SplitbookResult<T> = Result<T, SplitbookError>;
