//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use outlet_sheets_core::{CellGrid, CellValue, Workbook, Worksheet};

use crate::error::ReadResult;
use crate::options::ReadOptions;

/// Name given to the single sheet of a CSV read from a stream
pub const DEFAULT_CSV_SHEET: &str = "Sheet1";

/// CSV file reader
///
/// A CSV becomes a one-sheet workbook. No row is treated as a header: the
/// layout heuristics downstream decide where the header is.
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file; the sheet is named after the file stem
    pub fn read_file<P: AsRef<Path>>(path: P, options: &ReadOptions) -> ReadResult<Workbook> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_CSV_SHEET)
            .to_string();
        let file = File::open(path)?;
        Self::read(file, &name, options)
    }

    /// Read CSV from a reader into a one-sheet workbook
    pub fn read<R: Read>(reader: R, sheet_name: &str, options: &ReadOptions) -> ReadResult<Workbook> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.csv_delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let row_limit = options.row_limit();
        let mut rows = Vec::new();
        for result in csv_reader.records() {
            if rows.len() >= row_limit {
                break;
            }
            let record = result?;
            rows.push(
                record
                    .iter()
                    .take(options.max_cols)
                    .map(Self::detect_type)
                    .collect::<Vec<_>>(),
            );
        }

        let mut workbook = Workbook::new();
        workbook.add_worksheet(Worksheet::new(sheet_name, CellGrid::from_rows(rows)))?;
        Ok(workbook)
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> CellValue {
        let trimmed = field.trim();

        if trimmed.is_empty() {
            return CellValue::Empty;
        }

        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return CellValue::Number(n);
            }
        }

        CellValue::text(field)
    }
}
