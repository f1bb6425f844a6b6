//! Worksheet type

use crate::grid::CellGrid;

/// A worksheet: a name and its cell grid
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    /// Sheet name as stored in the source file
    name: String,
    /// Cell values
    grid: CellGrid,
}

impl Worksheet {
    /// Create a new worksheet with the given name and cells
    pub fn new<S: Into<String>>(name: S, grid: CellGrid) -> Self {
        Self {
            name: name.into(),
            grid,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the cell grid
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }
}
