/// Error types for dataset loading
use std::path::PathBuf;
use thiserror::Error;

/// Any failure while building the dataset. Loading is all-or-nothing, so
/// every variant means no store was produced.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open or read the dataset file
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse CSV data
    #[error("failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A field failed validation
    #[error("record {record}: invalid {field} '{value}'")]
    InvalidField {
        record: usize,
        field: &'static str,
        value: String,
    },

    /// The same country appears twice for one year
    #[error("record {record}: duplicate entry for {country} in {year}")]
    DuplicateRecord {
        record: usize,
        country: String,
        year: i32,
    },

    /// The table has no rows
    #[error("dataset contains no rows")]
    Empty,
}

/// Type alias for Results using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;
