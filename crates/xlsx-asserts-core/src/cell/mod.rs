//! Cell types: addresses, values and the cell record itself

mod address;
mod rich_text;
mod value;

pub use address::{column_string_from_index, range_boundaries, CellAddress, CellRange};
pub use rich_text::{RichText, TextRun};
pub use value::CellValue;

use crate::style::Style;

/// A populated cell: its address, value and resolved style.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Where the cell lives
    pub address: CellAddress,
    /// The cell's value
    pub value: CellValue,
    /// The cell's style (the default style when the file assigns none)
    pub style: Style,
}

impl Cell {
    /// Create a cell with the default style
    pub fn new(address: CellAddress, value: CellValue) -> Self {
        Self {
            address,
            value,
            style: Style::default(),
        }
    }

    /// Create a cell with an explicit style
    pub fn with_style(address: CellAddress, value: CellValue, style: Style) -> Self {
        Self {
            address,
            value,
            style,
        }
    }

    /// The cell's own A1-style coordinate
    pub fn coordinate(&self) -> String {
        self.address.to_a1_string()
    }
}
