//! Column block detection
//!
//! A block is a (month, percentage) column pair: one outlet's figures for
//! one month and their share of revenue.

use crate::error::{ExtractError, ExtractResult};
use crate::table::HeaderTable;
use crate::text::{is_month_token, is_percent_token};

/// Column headers quoted in a [`ExtractError::NoColumnBlocks`] diagnostic
const HEADER_SAMPLE: usize = 20;

/// A (value, percentage) column pair of a [`HeaderTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBlock {
    /// Table column holding the metric values
    pub value_col: usize,
    /// Table column holding the percentage of revenue (`value_col + 1`)
    pub pct_col: usize,
    /// Header of the value column, e.g. `June-25`
    pub month_label: String,
    /// Grid column of the value column, for label lookups above the header
    pub source_col: usize,
}

/// Detect all column blocks, left to right
///
/// A column consumed as a block's percentage column is never reconsidered
/// as the value column of the next block.
pub fn detect_blocks(table: &HeaderTable) -> ExtractResult<Vec<ColumnBlock>> {
    let columns = table.columns();
    let mut blocks = Vec::new();

    let mut i = 1;
    while i + 1 < columns.len() {
        let value = &columns[i];
        let pct = &columns[i + 1];
        if is_month_token(&value.header) && is_percent_token(&pct.header) {
            blocks.push(ColumnBlock {
                value_col: i,
                pct_col: i + 1,
                month_label: value.header.clone(),
                source_col: value.source_col,
            });
            i += 2;
        } else {
            i += 1;
        }
    }

    if blocks.is_empty() {
        return Err(ExtractError::NoColumnBlocks {
            anchor: table.anchor(),
            headers: table.headers(HEADER_SAMPLE),
        });
    }

    log::debug!("detected {} column block(s)", blocks.len());
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{HeaderAnchor, HeaderTier};
    use outlet_sheets_core::{CellGrid, CellValue};
    use pretty_assertions::assert_eq;

    fn table(headers: &[&str]) -> HeaderTable {
        let grid = CellGrid::from_rows(vec![headers.iter().map(|s| CellValue::from(*s)).collect()]);
        HeaderTable::slice(
            &grid,
            HeaderAnchor {
                row: 0,
                col: 0,
                tier: HeaderTier::Exact,
            },
        )
    }

    #[test]
    fn test_two_month_blocks() {
        let blocks = detect_blocks(&table(&["Particulars", "June-25", "%", "July-25", "%"])).unwrap();
        let summary: Vec<(usize, usize, &str)> = blocks
            .iter()
            .map(|b| (b.value_col, b.pct_col, b.month_label.as_str()))
            .collect();
        assert_eq!(summary, vec![(1, 2, "June-25"), (3, 4, "July-25")]);
    }

    #[test]
    fn test_interleaved_noise_and_suffixed_percent() {
        let blocks = detect_blocks(&table(&[
            "Particulars",
            "Total",
            "June-25",
            "%.1",
            "June-25",
            "June-25",
            "%",
        ]))
        .unwrap();
        let cols: Vec<usize> = blocks.iter().map(|b| b.value_col).collect();
        assert_eq!(cols, vec![2, 5]);
    }

    #[test]
    fn test_label_column_is_never_a_block() {
        // Column 0 is renamed to "Particulars" whatever its header was
        let result = detect_blocks(&table(&["June-25", "%"]));
        assert!(matches!(result, Err(ExtractError::NoColumnBlocks { .. })));
    }

    #[test]
    fn test_no_blocks_reports_headers() {
        let err = detect_blocks(&table(&["Particulars", "Amount", "Share"])).unwrap_err();
        match err {
            ExtractError::NoColumnBlocks { headers, .. } => {
                assert_eq!(headers, vec!["Particulars", "Amount", "Share"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
