//! # outlet-sheets
//!
//! Extract per-outlet monthly financials from irregular spreadsheet exports.
//!
//! Restaurant and retail P&L workbooks rarely share a layout. This crate reads
//! xlsx, xls, ods or csv files, works out where the outlet blocks are and
//! returns one normalized [`OutletRecord`] per outlet-month with twelve
//! financial line items.
//!
//! ## Features
//!
//! - Header detection with exact, substring and month-token fallbacks
//! - Month/% column pair detection and outlet/manager name recovery
//! - Already-tabular exports and one-sheet-per-outlet workbooks
//! - JSON and CSV output, interest-cost analysis
//!
//! ## Example
//!
//! ```rust,no_run
//! use outlet_sheets::prelude::*;
//!
//! let extraction = extract_file("june.xlsx", &ExtractOptions::default()).unwrap();
//! println!("{} strategy", extraction.strategy);
//! for record in &extraction.records {
//!     println!("{}: {:?}", record.outlet, record.metric(Metric::Ebidta));
//! }
//!
//! let report = InterestReport::from_records(&extraction.records);
//! println!("average interest rate {:.2}%", report.average_interest_rate);
//! ```

pub mod error;
pub mod interest;
pub mod output;
pub mod prelude;

pub use error::{Error, Result};
pub use interest::{InterestReport, MetricTotals, OutletInterest};
pub use output::{write_csv, write_json, write_records, OutputFormat};

// Re-export core types
pub use outlet_sheets_core::{CellGrid, CellValue, Workbook, Worksheet, MAX_COLS};

// Re-export I/O types
pub use outlet_sheets_io::{
    read_workbook, CsvReader, ExcelReader, ReadError, ReadOptions, SourceFormat,
};

// Re-export extraction types
pub use outlet_sheets_extract::{
    extract_outlet_sheets, extract_workbook, ErrorKind, ExtractError, ExtractOptions, Extraction,
    IdentityRecognizer, KeywordRecognizer, Metric, OutletRecord, OutletSheetsExtraction,
    SheetFailure, Strategy, CANONICAL_FIELDS,
};

use std::path::Path;

/// Extension trait for Workbook to add file I/O and extraction
pub trait WorkbookExt {
    /// Open a workbook from a file with default read options
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook>;

    /// Extract outlet records, trying every layout strategy
    fn extract(&self, options: &ExtractOptions) -> Result<Extraction>;

    /// Extract one record from each named per-outlet sheet
    fn extract_sheets<S: AsRef<str>>(
        &self,
        sheet_names: &[S],
        options: &ExtractOptions,
    ) -> Result<OutletSheetsExtraction>;
}

impl WorkbookExt for Workbook {
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook> {
        Ok(read_workbook(path, &ReadOptions::default())?)
    }

    fn extract(&self, options: &ExtractOptions) -> Result<Extraction> {
        Ok(extract_workbook(self, options)?)
    }

    fn extract_sheets<S: AsRef<str>>(
        &self,
        sheet_names: &[S],
        options: &ExtractOptions,
    ) -> Result<OutletSheetsExtraction> {
        Ok(extract_outlet_sheets(self, sheet_names, options)?)
    }
}

/// Read a spreadsheet file and extract its outlet records
pub fn extract_file<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> Result<Extraction> {
    let path = path.as_ref();
    let workbook = Workbook::open(path)?;
    log::info!(
        "read {} ({} sheet(s)): {:?}",
        path.display(),
        workbook.sheet_count(),
        workbook.sheet_names()
    );
    workbook.extract(options)
}
