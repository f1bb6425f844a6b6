//! Error type for file-level extraction

use thiserror::Error;

use outlet_sheets_extract::ExtractError;
use outlet_sheets_io::ReadError;

/// Result type for outlet-sheets operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from reading a file, extracting from it, or writing its records
#[derive(Debug, Error)]
pub enum Error {
    /// The source file could not be read
    #[error(transparent)]
    Read(#[from] ReadError),

    /// No records could be extracted
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// I/O error while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
