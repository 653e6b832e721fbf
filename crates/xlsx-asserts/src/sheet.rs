//! Sheet-extent assertions: column widths, row and column counts, merges

use crate::error::{ensure, ensure_eq, Result};
use crate::view::SheetView;

/// Assert the width of the column given by its letters ("C").
///
/// Widths compare exactly: 57.29 only matches 57.29.
pub fn assert_column_width_eq<S: SheetView>(expected: f64, sheet: &S, column: &str) -> Result<()> {
    let actual = sheet.column_width(column)?;
    ensure_eq(expected, actual, || {
        format!("{} column width does not equal expected value", column)
    })
}

/// Assert the number of rows from row 1 to the last row holding a value.
pub fn assert_sheet_rows_count<S: SheetView>(expected: usize, sheet: &S) -> Result<()> {
    ensure_eq(expected, sheet.to_array().len(), || {
        "Not empty rows count does not equal expected value".to_string()
    })
}

/// Assert the number of columns from A to the last column holding a value.
///
/// A sheet without values has no columns.
pub fn assert_sheet_columns_count<S: SheetView>(expected: usize, sheet: &S) -> Result<()> {
    let actual = sheet.to_array().first().map_or(0, Vec::len);
    ensure_eq(expected, actual, || {
        "Not empty columns count does not equal expected value".to_string()
    })
}

/// Assert `range` ("A1:B2") is exactly one merged region.
///
/// The region covering the first cell of `range` must render as `range`
/// itself, so a sub-range of a larger merge fails.
pub fn assert_cells_merged<S: SheetView>(sheet: &S, range: &str) -> Result<()> {
    let first = range.split(':').next().unwrap_or(range);
    sheet.cell(first)?;

    let merged = sheet.merge_range(first)?;
    ensure(merged.as_deref() == Some(range), || {
        format!("Cells of {} range are not merged", range)
    })
}
