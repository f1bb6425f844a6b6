//! Cell-related types
//!
//! Source files type their cells loosely; every value read from a workbook is
//! reduced to one of the three [`CellValue`] variants at the grid boundary.

mod value;

pub use value::CellValue;
