//! Cell value types

use std::fmt;

/// Represents the value stored in a cell
///
/// Text and numbers are indistinguishable in many source exports until the
/// value is inspected, so consumers compare on the text projection
/// ([`CellValue::to_text`]) and read metrics through [`CellValue::as_number`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// String value
    Text(String),

    /// Numeric value (all numbers stored as f64, including date serials)
    Number(f64),
}

impl CellValue {
    /// Create a new text value
    ///
    /// An empty string becomes [`CellValue::Empty`], so that blank cells
    /// coming from different readers compare equal.
    pub fn text<S: Into<String>>(s: S) -> Self {
        let s = s.into();
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s)
        }
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Try to get the value as a number
    ///
    /// Only numeric cells answer here; parsing numeric-looking text is a
    /// policy decision left to the caller.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text projection of the cell
    ///
    /// Integral numbers are rendered without a fractional part.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::text(s)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_string_is_empty_cell() {
        assert_eq!(CellValue::from(""), CellValue::Empty);
        assert!(CellValue::Text(String::new()).is_empty());
        assert!(!CellValue::Number(0.0).is_empty());
    }

    #[test]
    fn test_number_text_projection() {
        assert_eq!(CellValue::Number(42.0).to_text(), "42");
        assert_eq!(CellValue::Number(-3.5).to_text(), "-3.5");
        assert_eq!(CellValue::Empty.to_text(), "");
        assert_eq!(CellValue::from("June-25").to_text(), "June-25");
    }

    #[test]
    fn test_as_number_only_for_numbers() {
        assert_eq!(CellValue::Number(1.5).as_number(), Some(1.5));
        assert_eq!(CellValue::from("1.5").as_number(), None);
        assert_eq!(CellValue::Empty.as_number(), None);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(CellValue::from(None::<f64>), CellValue::Empty);
        assert_eq!(CellValue::from(Some("PBT")), CellValue::Text("PBT".into()));
    }
}
