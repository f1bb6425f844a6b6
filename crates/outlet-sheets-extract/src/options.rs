//! Extraction options

use serde::Deserialize;

use crate::metric::METRIC_COUNT;

/// Options steering the layout heuristics
///
/// Every field has a default matching the source exports this engine was
/// tuned on; a config file only needs the fields it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractOptions {
    /// Name of the all-outlets sheet, matched case-insensitively (default: "Outlet wise")
    pub outlet_wise_sheet: String,
    /// Rows read by the single-sheet strategies (default: 1000, `None` for all)
    pub row_cap: Option<usize>,
    /// Try one-sheet-per-outlet extraction when everything else failed (default: true)
    pub per_sheet_fallback: bool,
    /// Metric rows a per-outlet sheet must have (default: the full vocabulary)
    pub min_metric_rows: usize,
    /// Month used when a per-outlet sheet does not name one (default: "June-25")
    pub default_month: String,
    /// Substrings marking a cell as an outlet name in per-outlet sheets
    pub outlet_keywords: Vec<String>,
    /// Rows and columns scanned for outlet/manager names in per-outlet sheets (default: 5)
    pub identity_scan: usize,
    /// Sheets never treated as per-outlet sheets
    pub ignored_sheets: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            outlet_wise_sheet: "Outlet wise".to_string(),
            row_cap: Some(1000),
            per_sheet_fallback: true,
            min_metric_rows: METRIC_COUNT,
            default_month: "June-25".to_string(),
            outlet_keywords: ["mg", "nagar", "layout", "road", "club", "paakashaala"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            identity_scan: 5,
            ignored_sheets: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let options: ExtractOptions = toml::from_str(
            r#"
            outlet_wise_sheet = "Branch wise"
            outlet_keywords = ["market", "circle"]
            "#,
        )
        .unwrap();

        assert_eq!(options.outlet_wise_sheet, "Branch wise");
        assert_eq!(options.outlet_keywords, vec!["market", "circle"]);
        assert_eq!(options.row_cap, Some(1000));
        assert_eq!(options.min_metric_rows, 12);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<ExtractOptions, _> = toml::from_str("row_limit = 5");
        assert!(result.is_err());
    }
}
