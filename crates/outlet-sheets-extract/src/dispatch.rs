//! Strategy selection over a whole workbook
//!
//! Source files come in several layouts. Strategies are tried in a fixed
//! order and the first one producing at least one record wins; every other
//! outcome is kept so that a total failure explains itself.

use std::borrow::Cow;
use std::fmt;

use outlet_sheets_core::{CellGrid, Workbook, Worksheet};

use crate::block_grid::extract_block_grid;
use crate::error::{AttemptFailure, ExtractError, ExtractResult, SheetFailure};
use crate::options::ExtractOptions;
use crate::outlet_sheets::{extract_outlet_sheets, outlet_sheet_candidates};
use crate::record::{retain_outlets, OutletRecord};
use crate::tabular::extract_tabular;
use crate::text::normalize;

/// Extraction strategies, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Block grid on the dedicated all-outlets sheet
    OutletWise,
    /// First sheet already in canonical row-per-record form
    Tabular,
    /// Block grid on the first sheet
    RawGrid,
    /// One worksheet per outlet
    PerOutletSheets,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::OutletWise,
        Strategy::Tabular,
        Strategy::RawGrid,
        Strategy::PerOutletSheets,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::OutletWise => "outlet-wise sheet",
            Strategy::Tabular => "tabular",
            Strategy::RawGrid => "raw grid",
            Strategy::PerOutletSheets => "per-outlet sheets",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a successful workbook extraction
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// The strategy that produced the records
    pub strategy: Strategy,
    pub records: Vec<OutletRecord>,
    /// Consolidated blocks or rows left out
    pub skipped_consolidated: usize,
    /// Sheets skipped in per-outlet-sheet mode
    pub sheet_failures: Vec<SheetFailure>,
}

impl Extraction {
    fn new(strategy: Strategy, records: Vec<OutletRecord>, skipped_consolidated: usize) -> Self {
        Self {
            strategy,
            records,
            skipped_consolidated,
            sheet_failures: Vec::new(),
        }
    }
}

/// Outcome of running one strategy
enum Attempt {
    Done(Extraction),
    /// The workbook offers nothing this strategy could run on
    NotApplicable(&'static str),
}

/// Extract outlet records from a workbook, trying each [`Strategy`] in turn
pub fn extract_workbook(workbook: &Workbook, options: &ExtractOptions) -> ExtractResult<Extraction> {
    if workbook.is_empty() {
        return Err(ExtractError::EmptyWorkbook);
    }

    let mut attempts = 0;
    let mut failures = Vec::new();
    for strategy in Strategy::ALL {
        match run_strategy(strategy, workbook, options) {
            Ok(Attempt::Done(extraction)) if !extraction.records.is_empty() => {
                log::info!(
                    "{} strategy produced {} record(s)",
                    strategy,
                    extraction.records.len()
                );
                return Ok(extraction);
            }
            Ok(Attempt::Done(_)) => {
                attempts += 1;
                log::warn!("{strategy} strategy produced no records");
                failures.push(AttemptFailure::new(strategy.name(), "no outlet records"));
            }
            Ok(Attempt::NotApplicable(why)) => {
                log::debug!("{strategy} strategy skipped: {why}");
                failures.push(AttemptFailure::new(
                    strategy.name(),
                    format!("not applicable ({why})"),
                ));
            }
            Err(err) => {
                attempts += 1;
                log::warn!("{strategy} strategy failed: {err}");
                failures.push(AttemptFailure::new(strategy.name(), err));
            }
        }
    }

    Err(ExtractError::NoUsableData { attempts, failures })
}

fn run_strategy(
    strategy: Strategy,
    workbook: &Workbook,
    options: &ExtractOptions,
) -> ExtractResult<Attempt> {
    let outlet_wise = find_outlet_wise_sheet(workbook, options);
    let first = workbook.worksheet(0).ok_or(ExtractError::EmptyWorkbook)?;

    match strategy {
        Strategy::OutletWise => {
            let Some(sheet) = outlet_wise else {
                return Ok(Attempt::NotApplicable("no outlet-wise sheet"));
            };
            let out = extract_block_grid(&capped(sheet.grid(), options.row_cap))?;
            Ok(Attempt::Done(Extraction::new(
                strategy,
                out.records,
                out.skipped_consolidated,
            )))
        }
        Strategy::Tabular => {
            let out = extract_tabular(first.grid())?;
            Ok(Attempt::Done(Extraction::new(
                strategy,
                out.records,
                out.skipped_consolidated,
            )))
        }
        Strategy::RawGrid => {
            if outlet_wise.is_some_and(|sheet| sheet.name() == first.name()) {
                return Ok(Attempt::NotApplicable("first sheet is the outlet-wise sheet"));
            }
            let out = extract_block_grid(&capped(first.grid(), options.row_cap))?;
            Ok(Attempt::Done(Extraction::new(
                strategy,
                out.records,
                out.skipped_consolidated,
            )))
        }
        Strategy::PerOutletSheets => {
            if !options.per_sheet_fallback {
                return Ok(Attempt::NotApplicable("disabled"));
            }
            let candidates = outlet_sheet_candidates(workbook, options);
            if candidates.is_empty() {
                return Ok(Attempt::NotApplicable("no candidate sheets"));
            }
            let out = extract_outlet_sheets(workbook, &candidates, options)?;
            let (records, skipped) = retain_outlets(out.records);
            let mut extraction = Extraction::new(strategy, records, skipped);
            extraction.sheet_failures = out.failures;
            Ok(Attempt::Done(extraction))
        }
    }
}

/// The all-outlets sheet, matched on normalized, case-folded names
pub fn find_outlet_wise_sheet<'a>(
    workbook: &'a Workbook,
    options: &ExtractOptions,
) -> Option<&'a Worksheet> {
    let wanted = normalize(&options.outlet_wise_sheet).to_lowercase();
    workbook
        .worksheets()
        .find(|sheet| normalize(sheet.name()).to_lowercase() == wanted)
}

fn capped(grid: &CellGrid, row_cap: Option<usize>) -> Cow<'_, CellGrid> {
    match row_cap {
        Some(cap) if grid.height() > cap => Cow::Owned(grid.truncated(cap)),
        _ => Cow::Borrowed(grid),
    }
}
