//! # outlet-sheets-extract
//!
//! Layout inference for outlet P&L workbooks.
//!
//! Source files put the same twelve line items in very different places:
//! side-by-side outlet blocks under a `PARTICULARS` header, an already
//! tabular export, or one worksheet per outlet. This crate finds the header,
//! pairs month and percentage columns into blocks, recovers outlet and
//! manager names from the cells above them and emits one [`OutletRecord`]
//! per outlet-month.
//!
//! ## Example
//!
//! ```rust
//! use outlet_sheets_core::{CellGrid, CellValue, Workbook, Worksheet};
//! use outlet_sheets_extract::{extract_workbook, ExtractOptions, Metric, Strategy};
//!
//! let t = |s: &str| CellValue::from(s);
//! let grid = CellGrid::from_rows(vec![
//!     vec![t(""), t("Ravi")],
//!     vec![t(""), t("MG Road")],
//!     vec![t("Particulars"), t("June-25"), t("%")],
//!     vec![t("EBIDTA"), CellValue::Number(1200.0), CellValue::Number(12.0)],
//! ]);
//! let workbook: Workbook = vec![Worksheet::new("Outlet wise", grid)].into_iter().collect();
//!
//! let extraction = extract_workbook(&workbook, &ExtractOptions::default()).unwrap();
//! assert_eq!(extraction.strategy, Strategy::OutletWise);
//! let record = &extraction.records[0];
//! assert_eq!(record.outlet, "MG Road");
//! assert_eq!(record.manager, "Ravi");
//! assert_eq!(record.month, "June");
//! assert_eq!(record.metric(Metric::Ebidta), Some(1200.0));
//! ```

pub mod block_grid;
pub mod blocks;
pub mod dispatch;
pub mod error;
pub mod header;
pub mod label;
pub mod metric;
pub mod options;
pub mod outlet_sheets;
pub mod record;
pub mod table;
pub mod tabular;
pub mod text;

pub use block_grid::{extract_block_grid, BlockGridExtraction};
pub use blocks::{detect_blocks, ColumnBlock};
pub use dispatch::{extract_workbook, find_outlet_wise_sheet, Extraction, Strategy};
pub use error::{
    AttemptFailure, ErrorKind, ExtractError, ExtractResult, SheetFailure, SheetFailureReason,
};
pub use header::{locate_header, HeaderAnchor, HeaderTier};
pub use label::{resolve_label, LabelProbe};
pub use metric::{Metric, CANONICAL_FIELDS, METRIC_COUNT};
pub use options::ExtractOptions;
pub use outlet_sheets::{
    extract_outlet_sheets, extract_outlet_sheets_with, infer_identity, outlet_sheet_candidates,
    IdentityRecognizer, KeywordRecognizer, OutletSheetsExtraction, SheetIdentity,
};
pub use record::{retain_outlets, FieldValue, OutletRecord};
pub use table::{HeaderTable, TableColumn};
pub use tabular::{extract_tabular, TabularExtraction};
