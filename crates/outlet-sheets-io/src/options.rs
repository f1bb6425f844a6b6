//! Read options

use outlet_sheets_core::MAX_COLS;

/// Options for reading source workbooks
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Keep at most this many rows per sheet (default: all)
    pub max_rows: Option<usize>,
    /// Keep at most this many columns per sheet (default: Excel limit)
    pub max_cols: usize,
    /// Field delimiter for CSV input (default: comma)
    pub csv_delimiter: u8,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            max_rows: None,
            max_cols: MAX_COLS,
            csv_delimiter: b',',
        }
    }
}

impl ReadOptions {
    /// Options capping every sheet to its first `max_rows` rows
    pub fn with_max_rows(max_rows: usize) -> Self {
        Self {
            max_rows: Some(max_rows),
            ..Self::default()
        }
    }

    pub(crate) fn row_limit(&self) -> usize {
        self.max_rows.unwrap_or(usize::MAX)
    }
}
