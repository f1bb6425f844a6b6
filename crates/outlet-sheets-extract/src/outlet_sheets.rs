//! Per-outlet-sheet extraction: one worksheet per outlet
//!
//! Each sheet is processed on its own; a sheet that does not look like an
//! outlet P&L is recorded as a [`SheetFailure`] and the batch carries on.

use std::collections::HashSet;

use outlet_sheets_core::{Workbook, Worksheet};

use crate::error::{AttemptFailure, ExtractError, ExtractResult, SheetFailure, SheetFailureReason};
use crate::header::{locate_header, PARTICULARS};
use crate::metric::Metric;
use crate::options::ExtractOptions;
use crate::record::OutletRecord;
use crate::table::HeaderTable;
use crate::text::{coerce_number, is_month_token, month_of, normalize, normalize_cell, normalize_cell_upper};

/// Decides which cells near the top of a sheet name its outlet and manager
///
/// Outlet naming conventions are local to the organization producing the
/// files, so the default keyword matcher can be swapped out.
pub trait IdentityRecognizer {
    /// Whether `text` names an outlet
    fn is_outlet_name(&self, text: &str) -> bool;

    /// The manager name carried by `text`, if it carries one
    fn manager_name(&self, text: &str) -> Option<String>;
}

/// Recognizes outlets by locality keywords and managers by employee codes
///
/// A manager cell mixes digits and letters, e.g. `E1042-Ravi Kumar`; the text
/// after the first dash is the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRecognizer {
    keywords: Vec<String>,
}

impl KeywordRecognizer {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| normalize(k.as_ref()).to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn from_options(options: &ExtractOptions) -> Self {
        Self::new(&options.outlet_keywords)
    }
}

impl IdentityRecognizer for KeywordRecognizer {
    fn is_outlet_name(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }

    fn manager_name(&self, text: &str) -> Option<String> {
        let has_digit = text.chars().any(|c| c.is_ascii_digit());
        let has_alpha = text.chars().any(char::is_alphabetic);
        if !(has_digit && has_alpha) {
            return None;
        }
        let name = match text.split_once('-') {
            Some((_, rest)) => rest.trim(),
            None => text,
        };
        Some(name.to_string())
    }
}

/// Outlet and manager names of one sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetIdentity {
    pub outlet: String,
    pub manager: String,
}

/// Infer a sheet's outlet and manager from its top-left `scan` × `scan` cells
///
/// Only rows above `header_row` are read, so month headers such as "June-25"
/// never pass for a manager cell. Cells are visited row by row; a later match
/// replaces an earlier one. Either name falls back to the sheet name.
pub fn infer_identity(
    sheet: &Worksheet,
    scan: usize,
    header_row: usize,
    recognizer: &dyn IdentityRecognizer,
) -> SheetIdentity {
    let grid = sheet.grid();
    let mut outlet = None;
    let mut manager = None;

    for row in 0..scan.min(header_row).min(grid.height()) {
        for col in 0..scan.min(grid.width()) {
            let text = normalize_cell(grid.get(row, col));
            if text.is_empty() {
                continue;
            }
            if recognizer.is_outlet_name(&text) {
                outlet = Some(text);
            } else if let Some(name) = recognizer.manager_name(&text) {
                manager = Some(name);
            }
        }
    }

    SheetIdentity {
        outlet: outlet.unwrap_or_else(|| sheet.name().to_string()),
        manager: manager
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| sheet.name().to_string()),
    }
}

/// Records extracted in per-outlet-sheet mode
#[derive(Debug, Clone, PartialEq)]
pub struct OutletSheetsExtraction {
    /// One record per successfully processed sheet
    pub records: Vec<OutletRecord>,
    /// Sheets that were skipped, and why
    pub failures: Vec<SheetFailure>,
}

impl OutletSheetsExtraction {
    /// Number of sheets that produced a record
    pub fn processed(&self) -> usize {
        self.records.len()
    }
}

/// Extract one record per named sheet, with the default keyword recognizer
pub fn extract_outlet_sheets<S: AsRef<str>>(
    workbook: &Workbook,
    sheet_names: &[S],
    options: &ExtractOptions,
) -> ExtractResult<OutletSheetsExtraction> {
    let recognizer = KeywordRecognizer::from_options(options);
    extract_outlet_sheets_with(workbook, sheet_names, options, &recognizer)
}

/// Extract one record per named sheet
///
/// Fails with [`ExtractError::NoUsableData`] only when no sheet produced a
/// record.
pub fn extract_outlet_sheets_with<S: AsRef<str>>(
    workbook: &Workbook,
    sheet_names: &[S],
    options: &ExtractOptions,
    recognizer: &dyn IdentityRecognizer,
) -> ExtractResult<OutletSheetsExtraction> {
    log::info!("processing {} outlet sheet(s)", sheet_names.len());

    let mut records = Vec::new();
    let mut failures = Vec::new();
    for name in sheet_names {
        let name = name.as_ref();
        let result = match workbook.worksheet_by_name(name) {
            Some(sheet) => extract_outlet_sheet(sheet, options, recognizer),
            None => Err(SheetFailure::new(name, SheetFailureReason::Missing)),
        };
        match result {
            Ok(record) => {
                log::debug!("sheet '{}': outlet '{}'", name, record.outlet);
                records.push(record);
            }
            Err(failure) => {
                log::warn!("{failure}");
                failures.push(failure);
            }
        }
    }

    log::info!(
        "per-outlet sheets: {} processed, {} failed",
        records.len(),
        failures.len()
    );

    if records.is_empty() {
        return Err(ExtractError::NoUsableData {
            attempts: sheet_names.len(),
            failures: failures
                .iter()
                .map(|f| AttemptFailure::new(format!("sheet '{}'", f.sheet), &f.reason))
                .collect(),
        });
    }

    Ok(OutletSheetsExtraction { records, failures })
}

/// Extract the single record of one outlet sheet
pub fn extract_outlet_sheet(
    sheet: &Worksheet,
    options: &ExtractOptions,
    recognizer: &dyn IdentityRecognizer,
) -> Result<OutletRecord, SheetFailure> {
    let fail = |reason| SheetFailure::new(sheet.name(), reason);
    let grid = sheet.grid();

    let anchor = locate_header(grid).map_err(|_| fail(SheetFailureReason::Empty))?;
    let table = HeaderTable::slice(grid, anchor);
    if table.row_count() == 0 {
        return Err(fail(SheetFailureReason::NoDataRows));
    }

    let label_header = normalize_cell_upper(grid.get(anchor.row, anchor.col));
    if label_header != PARTICULARS {
        return Err(fail(SheetFailureReason::NoLabelColumn {
            found: normalize_cell(grid.get(anchor.row, anchor.col)),
        }));
    }

    let metric_rows = table.metric_rows();
    let found = metric_rows.iter().map(|(m, _)| *m).collect::<HashSet<Metric>>().len();
    let required = options.min_metric_rows.max(1);
    if found < required {
        return Err(fail(SheetFailureReason::TooFewMetricRows { found, required }));
    }

    let data_col = (1..table.columns().len())
        .find(|&col| {
            let values: Vec<f64> = metric_rows
                .iter()
                .filter_map(|(_, row)| row.get(col).and_then(coerce_number))
                .collect();
            !values.is_empty() && values.iter().sum::<f64>() > 0.0
        })
        .ok_or_else(|| fail(SheetFailureReason::NoDataColumn))?;

    let identity = infer_identity(sheet, options.identity_scan, anchor.row, recognizer);
    let month = match table.header(data_col) {
        Some(header) if is_month_token(header) => month_of(header),
        _ => month_of(&options.default_month),
    };

    let mut record = OutletRecord::new(identity.outlet, identity.manager, month);
    for (metric, row) in &metric_rows {
        record.set_metric(*metric, row.get(data_col).and_then(coerce_number));
    }
    Ok(record)
}

/// Sheets worth trying in per-outlet-sheet mode
///
/// Everything except the all-outlets sheet and the configured ignore list.
pub fn outlet_sheet_candidates<'a>(workbook: &'a Workbook, options: &ExtractOptions) -> Vec<&'a str> {
    let excluded: Vec<String> = std::iter::once(&options.outlet_wise_sheet)
        .chain(&options.ignored_sheets)
        .map(|name| normalize(name).to_lowercase())
        .collect();

    workbook
        .sheet_names()
        .into_iter()
        .filter(|name| !excluded.contains(&normalize(name).to_lowercase()))
        .collect()
}
