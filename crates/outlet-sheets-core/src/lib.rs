//! # outlet-sheets-core
//!
//! Core data structures for the outlet-sheets extraction engine.
//!
//! This crate provides the fundamental types used throughout outlet-sheets:
//! - [`CellValue`] - A loosely typed cell (empty, text or number)
//! - [`CellGrid`] - An immutable, rectangular matrix of cell values
//! - [`Worksheet`], [`Workbook`] - Named grids as read from a source file
//!
//! ## Example
//!
//! ```rust
//! use outlet_sheets_core::{CellGrid, CellValue, Workbook, Worksheet};
//!
//! let grid = CellGrid::from_rows(vec![
//!     vec![CellValue::from("Particulars"), CellValue::from("June-25")],
//!     vec![CellValue::from("EBIDTA")],
//! ]);
//! assert_eq!(grid.width(), 2);
//! assert!(grid.get(1, 1).is_empty());
//!
//! let mut workbook = Workbook::new();
//! workbook.add_worksheet(Worksheet::new("Outlet wise", grid)).unwrap();
//! assert_eq!(workbook.sheet_names(), vec!["Outlet wise"]);
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::CellValue;
pub use error::{Error, Result};
pub use grid::CellGrid;
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: usize = 16_384;
