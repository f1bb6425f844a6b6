//! Proximity search for labels in merged or offset header cells

use outlet_sheets_core::CellGrid;

use crate::text::normalize_cell;

/// Column offsets tried at each row, closest first
const LATERAL_OFFSETS: [isize; 5] = [0, -1, 1, -2, 2];

/// Where to start looking for a label, relative to the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelProbe {
    /// Rows above the header row to start at
    pub rows_above_header: usize,
    /// Further rows to climb
    pub max_up: usize,
}

impl LabelProbe {
    /// Outlet names usually sit on the row right above the header
    pub const OUTLET: LabelProbe = LabelProbe {
        rows_above_header: 1,
        max_up: 6,
    };

    /// Manager names sit a few rows higher
    pub const MANAGER: LabelProbe = LabelProbe {
        rows_above_header: 3,
        max_up: 8,
    };

    /// Resolve this probe for the column `col` of a sheet whose header is at `header_row`
    pub fn resolve(self, grid: &CellGrid, header_row: usize, col: usize) -> String {
        let base_row = header_row.saturating_sub(self.rows_above_header);
        resolve_label(grid, base_row, col, self.max_up)
    }
}

/// Nearest non-empty text at or above `(base_row, base_col)`
///
/// Rows are scanned from `base_row` upward, at most `max_up` rows beyond it
/// and never past row 0. Within a row the exact column wins over one column
/// either side, which wins over two. Returns an empty string when nothing is
/// found.
pub fn resolve_label(grid: &CellGrid, base_row: usize, base_col: usize, max_up: usize) -> String {
    let lowest = base_row.saturating_sub(max_up);
    for row in (lowest..=base_row).rev() {
        for dx in LATERAL_OFFSETS {
            let Some(col) = base_col.checked_add_signed(dx) else {
                continue;
            };
            if col >= grid.width() {
                continue;
            }
            let text = normalize_cell(grid.get(row, col));
            if !text.is_empty() {
                return text;
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use outlet_sheets_core::CellValue;
    use pretty_assertions::assert_eq;

    fn sparse(height: usize, width: usize, cells: &[(usize, usize, &str)]) -> CellGrid {
        let mut rows = vec![vec![CellValue::Empty; width]; height];
        for &(r, c, s) in cells {
            rows[r][c] = CellValue::from(s);
        }
        CellGrid::from_rows(rows)
    }

    #[test]
    fn test_lateral_before_climbing() {
        let g = sparse(12, 8, &[(9, 3, "Outlet A"), (8, 4, "Outlet B")]);
        assert_eq!(resolve_label(&g, 10, 4, 6), "Outlet A");
    }

    #[test]
    fn test_offset_priority_within_row() {
        let g = sparse(3, 8, &[(2, 6, "right two"), (2, 5, "right one"), (2, 2, "left two")]);
        assert_eq!(resolve_label(&g, 2, 4, 0), "right one");

        let g = sparse(3, 8, &[(2, 6, "right two"), (2, 2, "left two")]);
        assert_eq!(resolve_label(&g, 2, 4, 0), "left two");
    }

    #[test]
    fn test_bounded_climb() {
        let g = sparse(10, 3, &[(1, 1, "far")]);
        assert_eq!(resolve_label(&g, 9, 1, 7), "");
        assert_eq!(resolve_label(&g, 9, 1, 8), "far");
    }

    #[test]
    fn test_edges_and_normalization() {
        let g = sparse(2, 2, &[(0, 0, "\u{00A0}Ravi  Kumar ")]);
        assert_eq!(resolve_label(&g, 1, 0, 6), "Ravi Kumar");
        assert_eq!(resolve_label(&g, 0, 1, 0), "Ravi Kumar");
        assert_eq!(resolve_label(&CellGrid::new(), 0, 0, 6), "");
    }

    #[test]
    fn test_probes_clamp_at_row_zero() {
        let g = sparse(4, 3, &[(0, 1, "Paakashaala"), (1, 1, "Indiranagar")]);
        assert_eq!(LabelProbe::OUTLET.resolve(&g, 2, 1), "Indiranagar");
        assert_eq!(LabelProbe::MANAGER.resolve(&g, 2, 1), "Paakashaala");
        assert_eq!(LabelProbe::OUTLET.resolve(&g, 0, 1), "Paakashaala");
    }
}
