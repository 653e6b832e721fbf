//! Read-only views of a worksheet and its cells
//!
//! The assertions only ever talk to these traits, so any sheet model can be
//! checked by implementing them. [`Worksheet`] and [`Cell`] from
//! `xlsx-asserts-core` implement both out of the box.

use xlsx_asserts_core::{
    column_string_from_index, range_boundaries, Cell, CellAddress, CellValue, Result, Style,
    Worksheet,
};

/// A single cell as seen by the assertions
pub trait CellView {
    /// The cell's own A1 coordinate
    fn coordinate(&self) -> String;

    /// The stored value
    fn value(&self) -> &CellValue;

    /// The resolved cell style
    fn style(&self) -> &Style;
}

/// A worksheet as seen by the assertions
pub trait SheetView {
    /// Cell type handed out by [`SheetView::cell`]
    type Cell: CellView;

    /// Resolve a single-cell coordinate.
    ///
    /// Malformed or out-of-bounds coordinates and ranges must be rejected with
    /// a coordinate error; a valid coordinate with nothing stored is `Ok(None)`.
    fn cell(&self, coordinate: &str) -> Result<Option<&Self::Cell>>;

    /// The merged region covering a cell, as an A1 range string
    fn merge_range(&self, coordinate: &str) -> Result<Option<String>>;

    /// Width of a column given by its letters
    fn column_width(&self, column: &str) -> Result<f64>;

    /// The grid of values from A1 to the last non-empty row and column
    fn to_array(&self) -> Vec<Vec<CellValue>>;

    /// Inclusive 1-based `((start_col, start_row), (end_col, end_row))` bounds
    fn range_boundaries(&self, range: &str) -> Result<((u32, u32), (u32, u32))> {
        range_boundaries(range)
    }

    /// Letters for a 1-based column index
    fn column_string(&self, index: u32) -> Result<String> {
        column_string_from_index(index)
    }
}

impl CellView for Cell {
    fn coordinate(&self) -> String {
        Cell::coordinate(self)
    }

    fn value(&self) -> &CellValue {
        &self.value
    }

    fn style(&self) -> &Style {
        &self.style
    }
}

impl SheetView for Worksheet {
    type Cell = Cell;

    fn cell(&self, coordinate: &str) -> Result<Option<&Cell>> {
        Worksheet::cell(self, coordinate)
    }

    fn merge_range(&self, coordinate: &str) -> Result<Option<String>> {
        let addr = CellAddress::parse(coordinate)?;
        Ok(self.merge_range_of(&addr).map(|range| range.to_a1_string()))
    }

    fn column_width(&self, column: &str) -> Result<f64> {
        Ok(self.column_dimension(column)?.width())
    }

    fn to_array(&self) -> Vec<Vec<CellValue>> {
        Worksheet::to_array(self)
    }
}
