//! Reading real xlsx files written with rust_xlsxwriter

use outlet_sheets_io::{read_workbook, ExcelReader, ReadError, ReadOptions};
use pretty_assertions::assert_eq;
use rust_xlsxwriter::Workbook as XlsxWorkbook;

fn write_fixture(path: &std::path::Path) {
    let mut book = XlsxWorkbook::new();

    let sheet = book.add_worksheet();
    sheet.set_name("Outlet wise").unwrap();
    sheet.write_string(0, 2, "MG Road").unwrap();
    sheet.write_string(2, 1, "Particulars").unwrap();
    sheet.write_string(2, 2, "June-25").unwrap();
    sheet.write_string(2, 3, "%").unwrap();
    sheet.write_string(3, 1, "EBIDTA").unwrap();
    sheet.write_number(3, 2, 1500.0).unwrap();
    sheet.write_number(3, 3, 0.12).unwrap();
    sheet.write_boolean(4, 1, true).unwrap();

    let second = book.add_worksheet();
    second.set_name("Notes").unwrap();
    second.write_string(0, 0, "free text").unwrap();

    book.save(path).unwrap();
}

#[test]
fn test_read_xlsx_positions_and_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("outlets.xlsx");
    write_fixture(&path);

    let wb = read_workbook(&path, &ReadOptions::default()).unwrap();
    assert_eq!(wb.sheet_names(), vec!["Outlet wise", "Notes"]);

    let grid = wb.worksheet_by_name("Outlet wise").unwrap().grid();
    assert_eq!(grid.get(0, 2).to_text(), "MG Road");
    assert_eq!(grid.get(2, 1).to_text(), "Particulars");
    assert_eq!(grid.get(3, 2).as_number(), Some(1500.0));
    assert_eq!(grid.get(4, 1).to_text(), "TRUE");
    assert!(grid.get(1, 1).is_empty());
}

#[test]
fn test_read_xlsx_from_bytes_with_row_cap() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("outlets.xlsx");
    write_fixture(&path);

    let bytes = std::fs::read(&path).unwrap();
    let wb = ExcelReader::read_bytes(&bytes, &ReadOptions::with_max_rows(3)).unwrap();
    let grid = wb.worksheet(0).unwrap().grid();
    assert_eq!(grid.height(), 3);
    assert_eq!(grid.get(2, 2).to_text(), "June-25");
}

#[test]
fn test_read_csv_file_uses_stem_as_sheet_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clean_outlets.csv");
    std::fs::write(&path, "Outlet,Outlet Manager,TOTAL REVENUE\nMG Road,Ravi,1000\n").unwrap();

    let wb = read_workbook(&path, &ReadOptions::default()).unwrap();
    assert_eq!(wb.sheet_names(), vec!["clean_outlets"]);
    assert_eq!(wb.worksheet(0).unwrap().grid().get(1, 2).as_number(), Some(1000.0));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_workbook(dir.path().join("absent.csv"), &ReadOptions::default()).unwrap_err();
    assert!(matches!(err, ReadError::Io(_)));
}
