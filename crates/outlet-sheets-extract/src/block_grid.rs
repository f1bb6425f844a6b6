//! Single-block-grid extraction: every outlet side by side on one sheet
//!
//! ```text
//!            |          | Ravi (mgr)   |     | Asha (mgr)  |     |
//!            |          | MG Road      |     | Indiranagar |     |
//!  header -> | PARTICULARS | June-25   |  %  | June-25     |  %  |
//!            | EBIDTA   | 1200         | 12  | 900         | 10  |
//! ```

use outlet_sheets_core::CellGrid;

use crate::blocks::detect_blocks;
use crate::error::{ExtractError, ExtractResult};
use crate::header::{locate_header, HeaderAnchor};
use crate::label::LabelProbe;
use crate::metric::Metric;
use crate::record::OutletRecord;
use crate::table::HeaderTable;
use crate::text::{coerce_number, is_consolidated, month_of};

/// Row labels quoted in a [`ExtractError::NoMetricRows`] diagnostic
const LABEL_SAMPLE: usize = 30;

/// Records extracted from one block grid
#[derive(Debug, Clone, PartialEq)]
pub struct BlockGridExtraction {
    /// Where the header was found
    pub anchor: HeaderAnchor,
    /// One record per outlet-month block
    pub records: Vec<OutletRecord>,
    /// Blocks skipped because they summarize all outlets
    pub skipped_consolidated: usize,
}

/// Extract every outlet-month block of a grid
pub fn extract_block_grid(grid: &CellGrid) -> ExtractResult<BlockGridExtraction> {
    let anchor = locate_header(grid)?;

    let mut table = HeaderTable::slice(grid, anchor);
    table.drop_empty_columns();
    log::debug!(
        "table after dropping empty columns: {} rows x {} cols",
        table.row_count(),
        table.columns().len()
    );

    let metric_rows = table.metric_rows();
    if metric_rows.is_empty() {
        let labels = table.distinct_labels(LABEL_SAMPLE);
        let hints = near_misses(&labels);
        return Err(ExtractError::NoMetricRows {
            anchor,
            labels,
            hints,
        });
    }
    log::debug!("found {} required metric rows", metric_rows.len());

    let blocks = detect_blocks(&table)?;

    let mut records = Vec::with_capacity(blocks.len());
    let mut skipped_consolidated = 0;
    for block in &blocks {
        let outlet = LabelProbe::OUTLET.resolve(grid, anchor.row, block.source_col);
        if is_consolidated(&outlet) {
            skipped_consolidated += 1;
            continue;
        }
        let manager = LabelProbe::MANAGER.resolve(grid, anchor.row, block.source_col);

        let mut record = OutletRecord::new(outlet, manager, month_of(&block.month_label));
        for (metric, row) in &metric_rows {
            record.set_metric(*metric, row.get(block.value_col).and_then(coerce_number));
        }
        records.push(record);
    }

    log::info!(
        "extracted {} outlet record(s) from {} block(s), skipped {} consolidated",
        records.len(),
        blocks.len(),
        skipped_consolidated
    );

    Ok(BlockGridExtraction {
        anchor,
        records,
        skipped_consolidated,
    })
}

/// Labels that contain a metric name without matching it exactly
fn near_misses(labels: &[String]) -> Vec<String> {
    Metric::ALL
        .into_iter()
        .filter_map(|metric| {
            let needle = metric.label().to_lowercase();
            let matches: Vec<&str> = labels
                .iter()
                .filter(|l| l.to_lowercase().contains(&needle))
                .map(String::as_str)
                .collect();
            (!matches.is_empty()).then(|| format!("'{}' might match {:?}", metric, matches))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use outlet_sheets_core::CellValue;
    use pretty_assertions::assert_eq;

    fn grid(rows: Vec<Vec<CellValue>>) -> CellGrid {
        CellGrid::from_rows(rows)
    }

    fn t(s: &str) -> CellValue {
        CellValue::from(s)
    }

    fn n(v: f64) -> CellValue {
        CellValue::Number(v)
    }

    #[test]
    fn test_single_metric_without_blocks_fails() {
        let g = grid(vec![
            vec![t("Particulars"), t("Amount"), t("Share")],
            vec![t("EBIDTA"), n(10.0), n(1.0)],
        ]);
        let err = extract_block_grid(&g).unwrap_err();
        assert!(matches!(err, ExtractError::NoColumnBlocks { .. }));
        assert!(err.to_string().contains("no column blocks detected"));
    }

    #[test]
    fn test_no_metric_rows_lists_labels_and_hints() {
        let g = grid(vec![
            vec![t("Particulars"), t("June-25"), t("%")],
            vec![t("Revenue"), n(10.0), n(1.0)],
            vec![t("PBT (net)"), n(3.0), n(1.0)],
        ]);
        match extract_block_grid(&g).unwrap_err() {
            ExtractError::NoMetricRows { labels, hints, .. } => {
                assert_eq!(labels, vec!["Revenue", "PBT (net)"]);
                assert_eq!(hints, vec!["'PBT' might match [\"PBT (net)\"]"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blocks_resolve_names_and_skip_consolidated() {
        let g = grid(vec![
            vec![t(""), t(""), t("Ravi"), t(""), t(""), t(""), t("Asha")],
            vec![t(""), t(""), t(""), t(""), t(""), t(""), t("")],
            vec![t(""), t(""), t("MG Road"), t(""), t("Consolidated"), t(""), t("Club")],
            vec![
                t(""),
                t("PARTICULARS"),
                t("June-25"),
                t("%"),
                t("June-25"),
                t("%"),
                t("June-25"),
                t("%"),
            ],
            vec![t(""), t("TOTAL REVENUE"), n(1000.0), n(100.0), n(1800.0), n(100.0), n(800.0), n(100.0)],
            vec![t(""), t("Other"), n(1.0), n(0.0), n(2.0), n(0.0), n(1.0), n(0.0)],
            vec![t(""), t("PBT"), t("n/a"), n(5.0), n(220.0), n(12.0), n(120.0), n(15.0)],
        ]);

        let out = extract_block_grid(&g).unwrap();
        assert_eq!((out.anchor.row, out.anchor.col), (3, 1));
        assert_eq!(out.skipped_consolidated, 1);
        assert_eq!(out.records.len(), 2);

        let mg = &out.records[0];
        assert_eq!(mg.outlet, "MG Road");
        assert_eq!(mg.manager, "Ravi");
        assert_eq!(mg.month, "June");
        assert_eq!(mg.metric(Metric::TotalRevenue), Some(1000.0));
        assert_eq!(mg.metric(Metric::Pbt), None);
        assert_eq!(mg.metric(Metric::Cogs), None);

        let club = &out.records[1];
        assert_eq!(club.outlet, "Club");
        assert_eq!(club.manager, "Asha");
        assert_eq!(club.metric(Metric::Pbt), Some(120.0));
    }

    #[test]
    fn test_empty_outlet_month_column_survives() {
        let g = grid(vec![
            vec![t("Outlet A"), t(""), t(""), t("Outlet B"), t("")],
            vec![t("Particulars"), t("July-25"), t("%"), t("July-25"), t("%")],
            vec![t("EBIDTA"), n(10.0), n(1.0), t(""), t("")],
        ]);
        let out = extract_block_grid(&g).unwrap();
        assert_eq!(out.records.len(), 2);
        assert_eq!(out.records[1].outlet, "Outlet B");
        assert_eq!(out.records[1].metric(Metric::Ebidta), None);
    }
}
