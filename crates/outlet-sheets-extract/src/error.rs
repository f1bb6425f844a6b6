//! Extraction error types
//!
//! Errors carry what an operator needs to diagnose layout drift in a new
//! source file: where the header was found, which column headers and row
//! labels were seen, and what every strategy attempt reported.

use std::fmt;

use thiserror::Error;

use crate::header::HeaderAnchor;

/// Result type for extraction operations
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Coarse classification of an [`ExtractError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The grid has no structure to work with
    Structural,
    /// Structure was found but not the expected content; the next strategy may succeed
    Content,
    /// One worksheet of a per-outlet batch failed; the batch continues
    PerSheet,
    /// Every strategy and sheet failed
    NoUsableData,
}

/// Errors that can occur during extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The worksheet holds no non-empty cell
    #[error("worksheet has no content; no header can be located")]
    EmptyGrid,

    /// No row label under the header matched the metric vocabulary
    #[error(
        "none of the required metric rows were found under 'Particulars' (header at {anchor}); labels seen: {labels:?}{}",
        hint_suffix(.hints)
    )]
    NoMetricRows {
        anchor: HeaderAnchor,
        labels: Vec<String>,
        hints: Vec<String>,
    },

    /// No (month, %) column pair in the header row
    #[error(
        "no column blocks detected: no Month/% pairs (e.g. 'June-25' followed by '%') in header at {anchor}; column headers seen: {headers:?}"
    )]
    NoColumnBlocks {
        anchor: HeaderAnchor,
        headers: Vec<String>,
    },

    /// The first row is not an already-canonical table header
    #[error("first row is not a canonical outlet table; headers seen: {headers:?}")]
    NotTabular { headers: Vec<String> },

    /// The workbook has no worksheet at all
    #[error("workbook has no worksheets")]
    EmptyWorkbook,

    /// A single worksheet failed in per-outlet-sheet mode
    #[error(transparent)]
    Sheet(#[from] SheetFailure),

    /// Nothing could be extracted
    #[error("no usable data after {attempts} attempt(s): {}", join_attempts(.failures))]
    NoUsableData {
        attempts: usize,
        failures: Vec<AttemptFailure>,
    },
}

impl ExtractError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::EmptyGrid => ErrorKind::Structural,
            ExtractError::NoMetricRows { .. }
            | ExtractError::NoColumnBlocks { .. }
            | ExtractError::NotTabular { .. }
            | ExtractError::EmptyWorkbook => ErrorKind::Content,
            ExtractError::Sheet(_) => ErrorKind::PerSheet,
            ExtractError::NoUsableData { .. } => ErrorKind::NoUsableData,
        }
    }
}

/// Why one worksheet was skipped in per-outlet-sheet mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetFailureReason {
    /// The named sheet is not in the workbook
    Missing,
    /// The sheet holds no non-empty cell
    Empty,
    /// Nothing below the header row
    NoDataRows,
    /// The anchor column header is not "Particulars"
    NoLabelColumn { found: String },
    /// Fewer metric rows than required
    TooFewMetricRows { found: usize, required: usize },
    /// No column with numeric data summing to a positive amount
    NoDataColumn,
}

impl fmt::Display for SheetFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "sheet not found"),
            Self::Empty => write!(f, "sheet is empty"),
            Self::NoDataRows => write!(f, "not enough data rows below the header"),
            Self::NoLabelColumn { found } => {
                write!(f, "'Particulars' column not found (header cell is '{found}')")
            }
            Self::TooFewMetricRows { found, required } => {
                write!(f, "found {found} of {required} required metric rows")
            }
            Self::NoDataColumn => write!(f, "no numeric data column found"),
        }
    }
}

/// A worksheet skipped in per-outlet-sheet mode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("sheet '{sheet}': {reason}")]
pub struct SheetFailure {
    pub sheet: String,
    pub reason: SheetFailureReason,
}

impl SheetFailure {
    pub fn new<S: Into<String>>(sheet: S, reason: SheetFailureReason) -> Self {
        Self {
            sheet: sheet.into(),
            reason,
        }
    }
}

/// One failed attempt collected while looking for usable data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptFailure {
    /// Strategy or sheet that was tried
    pub attempt: String,
    /// Human-readable diagnostic
    pub message: String,
}

impl AttemptFailure {
    pub fn new<A: Into<String>, M: fmt::Display>(attempt: A, message: M) -> Self {
        Self {
            attempt: attempt.into(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.attempt, self.message)
    }
}

fn hint_suffix(hints: &[String]) -> String {
    if hints.is_empty() {
        String::new()
    } else {
        format!("; possible matches: {}", hints.join(", "))
    }
}

fn join_attempts(failures: &[AttemptFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
