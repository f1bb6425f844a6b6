//! Read error types

use thiserror::Error;

/// Result type for read operations
pub type ReadResult<T> = std::result::Result<T, ReadError>;

/// Errors that can occur while reading a source workbook
#[derive(Debug, Error)]
pub enum ReadError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Excel-family parse error
    #[error("Excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Extension not recognised as a spreadsheet format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Workbook without any worksheet
    #[error("Workbook contains no sheets")]
    NoSheets,

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] outlet_sheets_core::Error),
}
