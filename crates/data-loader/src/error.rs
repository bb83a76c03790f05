//! Error types for the data-loader crate.
//!
//! Every failure while reading the two precomputed snapshots surfaces as a
//! `DataLoadError`. Loading is all-or-nothing: a snapshot that fails any
//! check never produces a partially usable `Snapshot`.

use thiserror::Error;

/// Errors that can occur while loading and validating snapshots
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Snapshot file does not exist
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a snapshot
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a snapshot file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A field parsed but holds a value we refuse to serve (NaN, infinity)
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Similarity table shape does not line up with the catalog
    #[error("Similarity table {axis} mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        axis: String,
        expected: usize,
        found: usize,
    },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
