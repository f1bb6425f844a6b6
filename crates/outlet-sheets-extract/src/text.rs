//! Cell text normalization and token patterns
//!
//! Every comparison in the engine goes through [`normalize`] first. Metric
//! values never do: they are read through [`coerce_number`].

use lazy_regex::{regex_is_match, Lazy, Regex};
use outlet_sheets_core::CellValue;

/// `June-25`, `JUNE-25`, and the `.1` suffixed duplicates some exports emit
static MONTH_TOKEN: Lazy<Regex> = lazy_regex::lazy_regex!(r"^[A-Za-z]+-\d{2}(?:\.\d+)?$");

/// `%` and `%.1`, `%.2`, ...
static PERCENT_TOKEN: Lazy<Regex> = lazy_regex::lazy_regex!(r"^%(?:\.\d+)?$");

/// Clean up cell text for comparison
///
/// Non-breaking spaces become spaces, zero-width characters are removed,
/// whitespace runs collapse to one space and the result is trimmed.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;
    for ch in s.chars() {
        match ch {
            '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}' => {}
            c if c == '\u{00A0}' || c.is_whitespace() => pending_space = true,
            c => {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(c);
            }
        }
    }
    out
}

/// Normalized text projection of a cell
pub fn normalize_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Empty => String::new(),
        CellValue::Text(s) => normalize(s),
        CellValue::Number(_) => cell.to_text(),
    }
}

/// Uppercased, normalized text projection of a cell
pub fn normalize_cell_upper(cell: &CellValue) -> String {
    normalize_cell(cell).to_uppercase()
}

/// Whether normalized text looks like a month column header
pub fn is_month_token(text: &str) -> bool {
    MONTH_TOKEN.is_match(text)
}

/// Whether normalized text looks like a percentage column header
pub fn is_percent_token(text: &str) -> bool {
    text == "%" || PERCENT_TOKEN.is_match(text)
}

/// Month name of a header: the text before the first `-`, or all of it
pub fn month_of(header: &str) -> String {
    let header = normalize(header);
    match header.split_once('-') {
        Some((month, _)) => month.trim().to_string(),
        None => header,
    }
}

/// Numeric reading of a metric cell
///
/// Numbers pass through. Text is accepted when it parses as a finite number
/// once normalized and stripped of thousands separators; anything else,
/// including blanks, is missing.
pub fn coerce_number(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(n) if n.is_finite() => Some(*n),
        CellValue::Number(_) | CellValue::Empty => None,
        CellValue::Text(s) => {
            let cleaned = normalize(s).replace(',', "");
            if !regex_is_match!(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$", &cleaned) {
                return None;
            }
            cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
        }
    }
}

/// Case-insensitive test for fleet-wide summary names
pub fn is_consolidated(name: &str) -> bool {
    name.to_lowercase().contains("consolidated")
}
