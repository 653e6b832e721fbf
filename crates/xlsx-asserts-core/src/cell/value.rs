//! Cell value types

use std::fmt;

use super::RichText;

/// Represents the value stored in a cell
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// Boolean value (TRUE/FALSE)
    Boolean(bool),

    /// Numeric value (all numbers stored as f64, including dates)
    Number(f64),

    /// Plain string value
    String(String),

    /// Text made of separately formatted runs
    RichText(RichText),

    /// Error value as written in the file (#VALUE!, #REF!, etc.)
    Error(String),
}

impl CellValue {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        CellValue::String(s.into())
    }

    /// Check if the cell holds no value at all
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the value renders as an empty string.
    ///
    /// True for [`CellValue::Empty`], `""` and rich text whose runs are all empty.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.is_empty(),
            CellValue::RichText(rt) => rt.runs.iter().all(|run| run.text.is_empty()),
            _ => false,
        }
    }

    /// Check if the value counts as nothing: blank, `0` or `FALSE`.
    ///
    /// Text is falsy only when it is empty, so `"0"` is not.
    pub fn is_falsy(&self) -> bool {
        match self {
            CellValue::Number(n) => *n == 0.0,
            CellValue::Boolean(b) => !b,
            other => other.is_blank(),
        }
    }

    /// Flatten the value to the text a reader would see.
    ///
    /// Rich text loses its run formatting; numbers use the shortest
    /// representation that round-trips.
    pub fn plain_text(&self) -> String {
        match self {
            CellValue::RichText(rt) => rt.plain_text(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::String(s) => write!(f, "{}", s),
            CellValue::RichText(rt) => write!(f, "{}", rt),
            CellValue::Error(e) => write!(f, "{}", e),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<RichText> for CellValue {
    fn from(rt: RichText) -> Self {
        CellValue::RichText(rt)
    }
}
