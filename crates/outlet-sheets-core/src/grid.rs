//! Rectangular cell grid

use crate::cell::CellValue;

static EMPTY: CellValue = CellValue::Empty;

/// An immutable, 0-indexed matrix of cell values
///
/// Every row has exactly [`CellGrid::width`] cells; short rows are padded
/// with [`CellValue::Empty`] on construction. Reads outside the grid return
/// an empty cell instead of panicking, which keeps the proximity searches in
/// the extraction engine free of bounds bookkeeping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellGrid {
    rows: Vec<Vec<CellValue>>,
    width: usize,
}

impl CellGrid {
    /// Create an empty grid (zero rows, zero columns)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from ragged rows, right-padding short rows
    pub fn from_rows(mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, CellValue::Empty);
        }
        Self { rows, width }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height(), self.width)
    }

    /// Get a cell; out-of-range positions read as empty
    pub fn get(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Get a full row, or `None` past the last row
    pub fn row(&self, row: usize) -> Option<&[CellValue]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// A copy of the grid limited to its first `max_rows` rows
    ///
    /// The width is recomputed from the remaining rows so that trailing
    /// columns used only below the cap do not survive as padding.
    pub fn truncated(&self, max_rows: usize) -> CellGrid {
        if self.rows.len() <= max_rows {
            return self.clone();
        }
        let rows: Vec<Vec<CellValue>> = self.rows[..max_rows]
            .iter()
            .map(|r| {
                let used = r.iter().rposition(|c| !c.is_empty()).map_or(0, |p| p + 1);
                r[..used].to_vec()
            })
            .collect();
        CellGrid::from_rows(rows)
    }
}

impl FromIterator<Vec<CellValue>> for CellGrid {
    fn from_iter<I: IntoIterator<Item = Vec<CellValue>>>(iter: I) -> Self {
        CellGrid::from_rows(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text_row(cells: &[&str]) -> Vec<CellValue> {
        cells.iter().map(|s| CellValue::from(*s)).collect()
    }

    #[test]
    fn test_short_rows_are_padded() {
        let grid = CellGrid::from_rows(vec![text_row(&["a"]), text_row(&["b", "c", "d"])]);
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.row(0).unwrap().len(), 3);
        assert!(grid.get(0, 2).is_empty());
    }

    #[test]
    fn test_out_of_range_reads_are_empty() {
        let grid = CellGrid::from_rows(vec![text_row(&["a"])]);
        assert!(grid.get(5, 0).is_empty());
        assert!(grid.get(0, 9).is_empty());
        assert!(grid.row(1).is_none());
    }

    #[test]
    fn test_truncated_drops_rows_and_unused_width() {
        let grid = CellGrid::from_rows(vec![
            text_row(&["a", "b"]),
            text_row(&["c"]),
            text_row(&["d", "e", "f", "g"]),
        ]);
        let capped = grid.truncated(2);
        assert_eq!(capped.dimensions(), (2, 2));
        assert_eq!(capped.get(1, 0).to_text(), "c");

        let same = grid.truncated(10);
        assert_eq!(same, grid);
    }
}
