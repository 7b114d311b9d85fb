/// Error types for the JMA precipitation library
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for precipitation record operations
#[derive(Error, Debug)]
pub enum JmaError {
    /// Input path does not exist
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Row-level data is malformed
    #[error("Invalid data format: {0}")]
    DataFormat(String),

    /// Zero usable rows were loaded
    #[error("No usable rows in input; the year span cannot be computed")]
    EmptySeries,

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Failed to read input data
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using JmaError
pub type Result<T> = std::result::Result<T, JmaError>;
