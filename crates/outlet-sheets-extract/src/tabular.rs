//! Already-tabular sheets: one outlet-month per row under canonical headers

use outlet_sheets_core::{CellGrid, CellValue};

use crate::error::{ExtractError, ExtractResult};
use crate::metric::Metric;
use crate::record::{retain_outlets, OutletRecord};
use crate::text::{coerce_number, normalize_cell};

/// Headers quoted in a [`ExtractError::NotTabular`] diagnostic
const HEADER_SAMPLE: usize = 20;

/// Records read from a canonical table
#[derive(Debug, Clone, PartialEq)]
pub struct TabularExtraction {
    pub records: Vec<OutletRecord>,
    /// Rows dropped because they summarize all outlets
    pub skipped_consolidated: usize,
}

/// Column positions of the canonical fields within the first row
#[derive(Debug)]
struct TabularHeader {
    outlet: usize,
    manager: usize,
    month: Option<usize>,
    metrics: Vec<(Metric, usize)>,
}

impl TabularHeader {
    fn find(headers: &[String]) -> Option<Self> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let metrics: Vec<(Metric, usize)> = Metric::ALL
            .into_iter()
            .filter_map(|m| position(m.label()).map(|col| (m, col)))
            .collect();
        if !metrics.iter().any(|(m, _)| Metric::CORE_INCOME.contains(m)) {
            return None;
        }

        Some(Self {
            outlet: position("Outlet")?,
            manager: position("Outlet Manager")?,
            month: position("Month"),
            metrics,
        })
    }
}

/// Read a grid whose first row already carries the canonical field names
///
/// Requires "Outlet", "Outlet Manager" and at least one of the core income
/// metrics. Missing fields stay empty; blank rows are skipped.
pub fn extract_tabular(grid: &CellGrid) -> ExtractResult<TabularExtraction> {
    let headers: Vec<String> = grid
        .row(0)
        .map(|row| row.iter().map(normalize_cell).collect())
        .unwrap_or_default();

    let header = TabularHeader::find(&headers).ok_or_else(|| ExtractError::NotTabular {
        headers: headers
            .iter()
            .filter(|h| !h.is_empty())
            .take(HEADER_SAMPLE)
            .cloned()
            .collect(),
    })?;

    let records: Vec<OutletRecord> = grid
        .rows()
        .skip(1)
        .filter(|row| !row.iter().all(is_blank))
        .map(|row| {
            let text = |col: usize| row.get(col).map(normalize_cell).unwrap_or_default();
            let mut record = OutletRecord::new(
                text(header.outlet),
                text(header.manager),
                header.month.map(text).unwrap_or_default(),
            );
            for &(metric, col) in &header.metrics {
                record.set_metric(metric, row.get(col).and_then(coerce_number));
            }
            record
        })
        .collect();

    let (records, skipped_consolidated) = retain_outlets(records);
    log::info!(
        "tabular sheet: {} record(s), {} consolidated row(s) dropped",
        records.len(),
        skipped_consolidated
    );

    Ok(TabularExtraction {
        records,
        skipped_consolidated,
    })
}

fn is_blank(cell: &CellValue) -> bool {
    normalize_cell(cell).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid(rows: &[&[&str]]) -> CellGrid {
        rows.iter()
            .map(|r| r.iter().map(|s| CellValue::from(*s)).collect())
            .collect()
    }

    #[test]
    fn test_canonical_rows_are_projected() {
        let g = grid(&[
            &["Outlet", "Outlet Manager", "Month", "TOTAL REVENUE", "PBT", "Remarks"],
            &["MG Road", "Ravi", "June", "1,200", "80", "ok"],
            &["", "", "", "", "", ""],
            &["Consolidated", "-", "June", "5000", "300", ""],
            &["Club", "Asha", "June", "900", "n/a", ""],
        ]);
        let out = extract_tabular(&g).unwrap();

        assert_eq!(out.skipped_consolidated, 1);
        assert_eq!(out.records.len(), 2);
        let mg = &out.records[0];
        assert_eq!((mg.outlet.as_str(), mg.manager.as_str(), mg.month.as_str()), ("MG Road", "Ravi", "June"));
        assert_eq!(mg.metric(Metric::TotalRevenue), Some(1200.0));
        assert_eq!(mg.metric(Metric::Ebidta), None);
        assert_eq!(out.records[1].metric(Metric::Pbt), None);
    }

    #[test]
    fn test_missing_core_metric_is_not_tabular() {
        let g = grid(&[&["Outlet", "Outlet Manager", "PBT"], &["MG Road", "Ravi", "1"]]);
        let err = extract_tabular(&g).unwrap_err();
        assert!(matches!(err, ExtractError::NotTabular { ref headers } if headers.len() == 3));
    }

    #[test]
    fn test_block_grid_is_not_tabular() {
        let g = grid(&[&["", "MG Road"], &["Particulars", "June-25"], &["EBIDTA", "10"]]);
        assert!(matches!(extract_tabular(&g), Err(ExtractError::NotTabular { .. })));
        assert!(matches!(
            extract_tabular(&CellGrid::new()),
            Err(ExtractError::NotTabular { ref headers }) if headers.is_empty()
        ));
    }
}
