//! The post-header table: everything below and right of the header anchor

use std::collections::HashSet;

use outlet_sheets_core::{CellGrid, CellValue};

use crate::header::HeaderAnchor;
use crate::metric::Metric;
use crate::text::{is_month_token, is_percent_token, normalize_cell};

/// Name given to the label column of every sliced table
pub const LABEL_COLUMN: &str = "Particulars";

/// A column of a [`HeaderTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    /// Normalized header text
    pub header: String,
    /// Column index in the source grid
    pub source_col: usize,
}

/// Table sliced from a grid at its header anchor
///
/// The header row becomes column names and is not part of [`HeaderTable::rows`].
/// Column 0 is always the label column. Each column remembers its position
/// in the source grid, so filtering columns never loses the way back to the
/// cells above the header.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderTable {
    anchor: HeaderAnchor,
    columns: Vec<TableColumn>,
    rows: Vec<Vec<CellValue>>,
}

impl HeaderTable {
    /// Slice `grid` from the anchor row down and the anchor column rightward
    pub fn slice(grid: &CellGrid, anchor: HeaderAnchor) -> Self {
        let start_col = anchor.col.min(grid.width());
        let columns = (start_col..grid.width())
            .enumerate()
            .map(|(i, col)| TableColumn {
                header: if i == 0 {
                    LABEL_COLUMN.to_string()
                } else {
                    normalize_cell(grid.get(anchor.row, col))
                },
                source_col: col,
            })
            .collect();

        let rows = grid
            .rows()
            .skip(anchor.row + 1)
            .map(|row| row[start_col..].to_vec())
            .collect();

        Self {
            anchor,
            columns,
            rows,
        }
    }

    /// The anchor this table was sliced at
    pub fn anchor(&self) -> HeaderAnchor {
        self.anchor
    }

    /// Column descriptors, label column first
    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Header text of column `col`
    pub fn header(&self, col: usize) -> Option<&str> {
        self.columns.get(col).map(|c| c.header.as_str())
    }

    /// Data rows, cells aligned with [`HeaderTable::columns`]
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Normalized label of a data row
    pub fn label(row: &[CellValue]) -> String {
        row.first().map(normalize_cell).unwrap_or_default()
    }

    /// Drop columns that are empty in every data row
    ///
    /// The label column survives regardless, as do columns headed by a month
    /// or percentage token: an outlet with no figures for a month is still an
    /// outlet-month, not padding.
    pub fn drop_empty_columns(&mut self) {
        let keep: Vec<bool> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                i == 0
                    || is_month_token(&column.header)
                    || is_percent_token(&column.header)
                    || self
                        .rows
                        .iter()
                        .any(|row| row.get(i).is_some_and(|c| !c.is_empty()))
            })
            .collect();

        let mut flags = keep.iter();
        self.columns.retain(|_| *flags.next().unwrap_or(&true));
        for row in &mut self.rows {
            let mut flags = keep.iter();
            row.retain(|_| *flags.next().unwrap_or(&true));
        }
    }

    /// Data rows whose label is in the metric vocabulary, in sheet order
    pub fn metric_rows(&self) -> Vec<(Metric, &[CellValue])> {
        self.rows()
            .filter_map(|row| Metric::from_label(&Self::label(row)).map(|m| (m, row)))
            .collect()
    }

    /// Distinct non-empty row labels, first `limit` in sheet order
    pub fn distinct_labels(&self, limit: usize) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rows()
            .map(Self::label)
            .filter(|label| !label.is_empty() && seen.insert(label.clone()))
            .take(limit)
            .collect()
    }

    /// First `limit` column headers
    pub fn headers(&self, limit: usize) -> Vec<String> {
        self.columns
            .iter()
            .take(limit)
            .map(|c| c.header.clone())
            .collect()
    }
}
