//! Error types for the data-loader crate.
//!
//! Everything in here is fatal to startup: a catalog that fails to load
//! is never partially exposed to callers.

use thiserror::Error;

/// Errors that can occur while loading, cleaning and indexing the catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader failed outside of a specific record (e.g. bad header row)
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// The header row lacks one or more of the columns the catalog needs
    #[error("Missing required columns in {path}: {}", columns.join(", "))]
    MissingColumns { path: String, columns: Vec<String> },

    /// A record in the data file couldn't be parsed
    ///
    /// `line` is the 1-based line number reported by the CSV reader
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// The cleaned catalog broke one of its invariants
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
