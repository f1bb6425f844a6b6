//! Excel-family reader (xlsx, xlsm, xlsb, xls, ods) backed by calamine

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use outlet_sheets_core::{CellGrid, CellValue, Workbook, Worksheet};

use crate::error::{ReadError, ReadResult};
use crate::options::ReadOptions;

/// Excel workbook reader
pub struct ExcelReader;

impl ExcelReader {
    /// Read an Excel-family file into a workbook
    pub fn read_file<P: AsRef<Path>>(path: P, options: &ReadOptions) -> ReadResult<Workbook> {
        let path = path.as_ref();
        let mut sheets = open_workbook_auto(path)?;
        log::debug!("opened '{}'", path.display());
        Self::collect(&mut sheets, options)
    }

    /// Read an Excel-family workbook held in memory (e.g. an uploaded file)
    pub fn read_bytes(bytes: &[u8], options: &ReadOptions) -> ReadResult<Workbook> {
        let mut sheets = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        Self::collect(&mut sheets, options)
    }

    fn collect<RS: Read + Seek>(
        sheets: &mut Sheets<RS>,
        options: &ReadOptions,
    ) -> ReadResult<Workbook> {
        let sheet_names: Vec<String> = sheets.sheet_names().to_vec();
        if sheet_names.is_empty() {
            return Err(ReadError::NoSheets);
        }

        let mut workbook = Workbook::new();
        for name in &sheet_names {
            let range = sheets.worksheet_range(name)?;
            let grid = range_to_grid(&range, options);
            log::debug!(
                "sheet '{}': {} rows x {} cols",
                name,
                grid.height(),
                grid.width()
            );
            workbook.add_worksheet(Worksheet::new(name.as_str(), grid))?;
        }

        Ok(workbook)
    }
}

/// Place a calamine range at its absolute sheet position
fn range_to_grid(range: &Range<Data>, options: &ReadOptions) -> CellGrid {
    let (height, width) = range.get_size();
    if height == 0 || width == 0 {
        return CellGrid::new();
    }

    // Range start offset (data may not begin at A1)
    let (start_row, start_col) = range
        .start()
        .map_or((0, 0), |(r, c)| (r as usize, c as usize));

    let row_limit = options.row_limit();
    let col_limit = options.max_cols;
    if start_row + height > row_limit || start_col + width > col_limit {
        log::warn!(
            "sheet truncated from {}x{} to at most {}x{}",
            start_row + height,
            start_col + width,
            row_limit,
            col_limit
        );
    }

    let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); start_row.min(row_limit)];
    for row in range.rows() {
        if rows.len() >= row_limit {
            break;
        }
        let mut cells = vec![CellValue::Empty; start_col.min(col_limit)];
        cells.extend(
            row.iter()
                .take(col_limit.saturating_sub(start_col))
                .map(convert_cell),
        );
        rows.push(cells);
    }

    CellGrid::from_rows(rows)
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::text(s.as_str()),
        Data::Float(n) => CellValue::Number(*n),
        Data::Int(n) => CellValue::Number(*n as f64),
        Data::Bool(b) => CellValue::text(if *b { "TRUE" } else { "FALSE" }),
        Data::Error(e) => CellValue::text(e.to_string()),
        // Dates keep their serial number; headers that matter are text
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::text(s.as_str()),
        Data::DurationIso(s) => CellValue::text(s.as_str()),
    }
}
