//! Header anchor location
//!
//! The anchor is the cell heading the metric-label column: normally a cell
//! reading "Particulars", found anywhere in the grid. Sheets where that label
//! is missing or mangled fall back to the row with the most month tokens.

use std::fmt;

use outlet_sheets_core::CellGrid;

use crate::error::{ExtractError, ExtractResult};
use crate::text::{is_month_token, normalize_cell, normalize_cell_upper};

/// Label heading the metric-label column
pub const PARTICULARS: &str = "PARTICULARS";

/// How the anchor was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTier {
    /// A cell reading exactly "Particulars"
    Exact,
    /// A cell containing "Particulars"
    Substring,
    /// The row with the most month tokens
    MonthTokens,
}

/// Position of the metric-label column header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderAnchor {
    /// Row holding the column headers
    pub row: usize,
    /// Column holding the metric labels
    pub col: usize,
    /// Which tier located it
    pub tier: HeaderTier,
}

impl fmt::Display for HeaderAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.row, self.col)
    }
}

/// Locate the header anchor of a grid
///
/// Fails only with [`ExtractError::EmptyGrid`]; any grid with content yields
/// an anchor, even if it is a poor guess.
pub fn locate_header(grid: &CellGrid) -> ExtractResult<HeaderAnchor> {
    if grid.rows().flatten().all(|c| normalize_cell(c).is_empty()) {
        return Err(ExtractError::EmptyGrid);
    }

    let upper: Vec<Vec<String>> = grid
        .rows()
        .map(|row| row.iter().map(normalize_cell_upper).collect())
        .collect();

    let anchor = find_cell(&upper, |s| s == PARTICULARS, HeaderTier::Exact)
        .or_else(|| find_cell(&upper, |s| s.contains(PARTICULARS), HeaderTier::Substring))
        .unwrap_or_else(|| month_token_row(grid, &upper));

    log::debug!("header located at {} ({:?})", anchor, anchor.tier);
    Ok(anchor)
}

fn find_cell(
    upper: &[Vec<String>],
    pred: impl Fn(&str) -> bool,
    tier: HeaderTier,
) -> Option<HeaderAnchor> {
    upper.iter().enumerate().find_map(|(row, cells)| {
        cells
            .iter()
            .position(|s| pred(s))
            .map(|col| HeaderAnchor { row, col, tier })
    })
}

fn month_token_row(grid: &CellGrid, upper: &[Vec<String>]) -> HeaderAnchor {
    let mut best_row = 0;
    let mut best_count = 0;
    for (row, cells) in upper.iter().enumerate() {
        let count = cells.iter().filter(|s| is_month_token(s)).count();
        if count > best_count {
            best_row = row;
            best_count = count;
        }
    }

    let col = upper[best_row]
        .iter()
        .position(|s| s == PARTICULARS)
        .or_else(|| {
            grid.row(best_row)
                .and_then(|cells| cells.iter().position(|c| !normalize_cell(c).is_empty()))
        })
        .unwrap_or(0);

    HeaderAnchor {
        row: best_row,
        col,
        tier: HeaderTier::MonthTokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outlet_sheets_core::CellValue;
    use pretty_assertions::assert_eq;

    fn grid(rows: &[&[&str]]) -> CellGrid {
        CellGrid::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|s| CellValue::from(*s)).collect())
                .collect(),
        )
    }

    #[test]
    fn test_exact_match_wins() {
        let g = grid(&[
            &["Report", "", ""],
            &["", "Particulars (old)", ""],
            &["June-25", "July-25", "Aug-25"],
            &["", "PARTICULARS", "June-25"],
        ]);
        let anchor = locate_header(&g).unwrap();
        assert_eq!((anchor.row, anchor.col), (3, 1));
        assert_eq!(anchor.tier, HeaderTier::Exact);
    }

    #[test]
    fn test_exact_match_tolerates_spacing_and_case() {
        let g = grid(&[&["", ""], &["", "\u{00A0}particulars "]]);
        let anchor = locate_header(&g).unwrap();
        assert_eq!((anchor.row, anchor.col, anchor.tier), (1, 1, HeaderTier::Exact));
    }

    #[test]
    fn test_substring_match() {
        let g = grid(&[&["x", ""], &["", "Particulars / Month"]]);
        let anchor = locate_header(&g).unwrap();
        assert_eq!((anchor.row, anchor.col, anchor.tier), (1, 1, HeaderTier::Substring));
    }

    #[test]
    fn test_month_token_fallback() {
        let g = grid(&[
            &["Outlet P&L", "", "", "", ""],
            &["", "June-25", "", "", ""],
            &["", "", "", "", ""],
            &["", "", "", "", ""],
            &["", "", "", "", ""],
            &["Heads", "June-25", "Sep-25", "July-25", "Aug-25.1"],
            &["", "June-25", "", "May-24", ""],
            &["EBIDTA", "10", "1", "12", "3"],
        ]);
        let anchor = locate_header(&g).unwrap();
        assert_eq!(anchor.row, 5);
        assert_eq!(anchor.col, 0);
        assert_eq!(anchor.tier, HeaderTier::MonthTokens);
    }

    #[test]
    fn test_month_token_tie_keeps_first_row() {
        let g = grid(&[
            &["Report", "", ""],
            &["Heads", "June-25", "July-25"],
            &["Notes", "Aug-25", "Sep-25"],
            &["EBIDTA", "1", "2"],
        ]);
        let anchor = locate_header(&g).unwrap();
        assert_eq!((anchor.row, anchor.col, anchor.tier), (1, 0, HeaderTier::MonthTokens));
    }

    #[test]
    fn test_fallback_skips_leading_blank_cells() {
        let g = grid(&[&["", "", "June-25", "July-25"], &["", "EBIDTA", "1", "2"]]);
        let anchor = locate_header(&g).unwrap();
        assert_eq!((anchor.row, anchor.col), (0, 2));
    }

    #[test]
    fn test_fallback_without_tokens_degrades_to_row_zero() {
        let g = grid(&[&["", "title"], &["a", "b"]]);
        let anchor = locate_header(&g).unwrap();
        assert_eq!((anchor.row, anchor.col, anchor.tier), (0, 1, HeaderTier::MonthTokens));

        let single = grid(&[&["only"]]);
        assert_eq!(locate_header(&single).unwrap().row, 0);
    }

    #[test]
    fn test_empty_grid_is_structural_error() {
        assert!(matches!(
            locate_header(&CellGrid::new()),
            Err(ExtractError::EmptyGrid)
        ));
        assert!(matches!(
            locate_header(&grid(&[&["", " "]])),
            Err(ExtractError::EmptyGrid)
        ));
    }
}
