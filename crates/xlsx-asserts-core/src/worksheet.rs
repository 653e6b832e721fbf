//! Worksheet type

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::cell::{Cell, CellAddress, CellRange, CellValue};
use crate::column::{ColumnDimension, DEFAULT_COLUMN_WIDTH};
use crate::error::{Error, Result};
use crate::style::Style;

/// A worksheet (single sheet in a workbook)
#[derive(Debug, Clone)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Populated cells keyed by (row, col)
    cells: AHashMap<(u32, u16), Cell>,
    /// Columns with custom settings
    columns: BTreeMap<u16, ColumnDimension>,
    /// Merged regions in file order
    merged: Vec<CellRange>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: AHashMap::new(),
            columns: BTreeMap::new(),
            merged: Vec::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the sheet holds no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // === Cell Access ===

    /// Resolve a single-cell coordinate such as "B3".
    ///
    /// Ranges and absolute references are rejected; a well-formed coordinate
    /// with no stored cell yields `Ok(None)`.
    pub fn cell(&self, coordinate: &str) -> Result<Option<&Cell>> {
        let addr = parse_cell_coordinate(coordinate)?;
        Ok(self.cell_at(addr.row, addr.col))
    }

    /// Get a cell by row and column indices (0-based)
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// Iterate over all stored cells in no particular order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// Store a cell, returning the one it replaces
    pub fn insert_cell(&mut self, mut cell: Cell) -> Option<Cell> {
        cell.address = CellAddress::new(cell.address.row, cell.address.col);
        self.cells.insert((cell.address.row, cell.address.col), cell)
    }

    /// Set the value of a cell, keeping any style it already has
    pub fn insert_value<V: Into<CellValue>>(&mut self, coordinate: &str, value: V) -> Result<()> {
        let addr = parse_cell_coordinate(coordinate)?;
        self.cells
            .entry((addr.row, addr.col))
            .or_insert_with(|| Cell::new(addr, CellValue::Empty))
            .value = value.into();
        Ok(())
    }

    /// Set the style of a cell, keeping any value it already has
    pub fn set_cell_style(&mut self, coordinate: &str, style: Style) -> Result<()> {
        let addr = parse_cell_coordinate(coordinate)?;
        self.cells
            .entry((addr.row, addr.col))
            .or_insert_with(|| Cell::new(addr, CellValue::Empty))
            .style = style;
        Ok(())
    }

    // === Dimensions ===

    /// Highest 1-based row holding a non-blank value (0 for a blank sheet)
    pub fn highest_row(&self) -> u32 {
        self.value_cells()
            .map(|cell| cell.address.row + 1)
            .max()
            .unwrap_or(0)
    }

    /// Highest 1-based column holding a non-blank value (0 for a blank sheet)
    pub fn highest_column(&self) -> u32 {
        self.value_cells()
            .map(|cell| cell.address.col as u32 + 1)
            .max()
            .unwrap_or(0)
    }

    /// The value grid from A1 to the highest value-bearing row and column.
    ///
    /// Positions without a value are [`CellValue::Empty`]. A blank sheet
    /// yields no rows.
    pub fn to_array(&self) -> Vec<Vec<CellValue>> {
        let rows = self.highest_row();
        let cols = self.highest_column();

        (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| {
                        self.cell_at(row, col as u16)
                            .map(|cell| cell.value.clone())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }

    fn value_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values().filter(|cell| !cell.value.is_blank())
    }

    // === Columns ===

    /// Resolve a column by its letters ("C")
    pub fn column_dimension(&self, letter: &str) -> Result<ColumnDimension> {
        let index = CellAddress::letters_to_column(letter.trim())?;
        Ok(self
            .columns
            .get(&index)
            .cloned()
            .unwrap_or_else(|| ColumnDimension::new(index)))
    }

    /// Set column width by index (0-based)
    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.columns
            .entry(col)
            .or_insert_with(|| ColumnDimension::new(col))
            .width = Some(width);
    }

    // === Merged Cells ===

    /// Get merged regions
    pub fn merged_regions(&self) -> &[CellRange] {
        &self.merged
    }

    /// Merge cells
    pub fn merge_cells(&mut self, range: &CellRange) -> Result<()> {
        if self.merged.iter().any(|existing| range.overlaps(existing)) {
            return Err(Error::MergedCellConflict(range.to_string()));
        }
        self.merged.push(*range);
        Ok(())
    }

    /// The merged region covering a cell, if any
    pub fn merge_range_of(&self, addr: &CellAddress) -> Option<&CellRange> {
        let addr = CellAddress::new(addr.row, addr.col);
        self.merged.iter().find(|range| range.contains(&addr))
    }
}

/// Parse a coordinate that must name exactly one cell, relative.
fn parse_cell_coordinate(coordinate: &str) -> Result<CellAddress> {
    if coordinate.contains(':') || coordinate.contains(',') {
        return Err(Error::InvalidAddress(format!(
            "cell coordinate can not be a range of cells: '{}'",
            coordinate
        )));
    }
    if coordinate.contains('$') {
        return Err(Error::InvalidAddress(format!(
            "cell coordinate must not be absolute: '{}'",
            coordinate
        )));
    }
    CellAddress::parse(coordinate)
}
