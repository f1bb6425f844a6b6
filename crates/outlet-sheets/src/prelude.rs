//! Prelude module - common imports for outlet-sheets users
//!
//! ```rust
//! use outlet_sheets::prelude::*;
//! ```

pub use crate::{
    // Entry points
    extract_file,
    read_workbook,
    // Cell types
    CellGrid,
    CellValue,
    // Error types
    Error,
    ExtractError,
    ExtractOptions,
    Extraction,
    InterestReport,
    Metric,
    OutletRecord,
    OutputFormat,
    ReadOptions,
    Result,
    Strategy,
    // Main types
    Workbook,
    // Extension traits
    WorkbookExt,
    Worksheet,
};
