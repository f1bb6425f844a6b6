//! # outlet-sheets-io
//!
//! Readers that turn spreadsheet files into [`outlet_sheets_core::Workbook`]s.
//!
//! Excel-family files (xlsx, xlsm, xlsb, xls, ods) are read through `calamine`;
//! CSV files through the `csv` crate. Either way every cell is reduced to a
//! [`outlet_sheets_core::CellValue`] at its absolute sheet position, so a grid
//! read from `B3` onward still reports that cell at row 2, column 1.

mod csv_reader;
mod error;
mod excel;
mod options;

pub use csv_reader::CsvReader;
pub use error::{ReadError, ReadResult};
pub use excel::ExcelReader;
pub use options::ReadOptions;

use std::path::Path;

use outlet_sheets_core::Workbook;

/// Source file format, decided from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Any format calamine understands (xlsx, xlsm, xlsb, xls, ods)
    Excel,
    /// Comma-separated values
    Csv,
}

impl SourceFormat {
    /// Detect the format of a path from its extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("xlsx") | Some("xlsm") | Some("xlsb") | Some("xls") | Some("ods") => {
                Some(SourceFormat::Excel)
            }
            Some("csv") => Some(SourceFormat::Csv),
            _ => None,
        }
    }
}

/// Read any supported spreadsheet file into a workbook
pub fn read_workbook<P: AsRef<Path>>(path: P, options: &ReadOptions) -> ReadResult<Workbook> {
    let path = path.as_ref();
    match SourceFormat::from_path(path) {
        Some(SourceFormat::Excel) => ExcelReader::read_file(path, options),
        Some(SourceFormat::Csv) => CsvReader::read_file(path, options),
        None => Err(ReadError::UnsupportedFormat(path.display().to_string())),
    }
}
