//! Single-cell value and formatting assertions
//!
//! Every check first resolves its coordinate through [`SheetView::cell`]; a
//! coordinate the sheet rejects fails the assertion with the sheet's message.
//! A valid coordinate with no stored cell is checked as an empty cell with the
//! default style.

use xlsx_asserts_core::{CellValue, HorizontalAlignment, Style, Underline, VerticalAlignment};

use crate::error::{ensure, ensure_eq, AssertionFailure, Result};
use crate::view::{CellView, SheetView};

/// Resolve a coordinate, turning coordinate errors into assertion failures.
fn resolve<'a, S: SheetView>(sheet: &'a S, coordinate: &str) -> Result<Option<&'a S::Cell>> {
    Ok(sheet.cell(coordinate)?)
}

/// Run `check` against the style of the cell at `coordinate`.
fn with_style<S, F>(sheet: &S, coordinate: &str, check: F) -> Result<()>
where
    S: SheetView,
    F: FnOnce(&Style, Option<&S::Cell>) -> Result<()>,
{
    let cell = resolve(sheet, coordinate)?;
    let default = Style::default();
    let style = cell.map(CellView::style).unwrap_or(&default);
    check(style, cell)
}

/// The coordinate a cell reports for itself, or the one the caller gave.
fn reported_coordinate<C: CellView>(cell: Option<&C>, coordinate: &str) -> String {
    cell.map(CellView::coordinate)
        .unwrap_or_else(|| coordinate.to_string())
}

/// Compare a value with the expected text by its rendering.
///
/// Rich text renders as its plain text, whole numbers without a fraction
/// (`3`, never `3.0`) and booleans as `TRUE` or `FALSE`.
fn value_matches(expected: &str, actual: &CellValue) -> bool {
    actual.plain_text() == expected
}

/// Assert the cell's value, flattened to plain text, equals `expected`.
pub fn assert_cell_value_eq<S: SheetView>(expected: &str, sheet: &S, coordinate: &str) -> Result<()> {
    let cell = resolve(sheet, coordinate)?;
    let empty = CellValue::Empty;
    let actual = cell.map(CellView::value).unwrap_or(&empty);

    if value_matches(expected, actual) {
        Ok(())
    } else {
        Err(AssertionFailure::new(format!(
            "{} cell value does not equal expected value",
            coordinate
        ))
        .with_values(expected, actual.plain_text())
        .into())
    }
}

/// Assert the cell holds nothing: no value, `""`, `0` or `FALSE`.
///
/// A coordinate with no stored cell passes. Any non-empty text fails.
pub fn assert_cell_empty<S: SheetView>(sheet: &S, coordinate: &str) -> Result<()> {
    let cell = resolve(sheet, coordinate)?;
    match cell.map(CellView::value) {
        Some(value) if !value.is_falsy() => Err(AssertionFailure::new(format!(
            "{} cell value is not empty",
            coordinate
        ))
        .with_values("", value.plain_text())
        .into()),
        _ => Ok(()),
    }
}

/// Assert the cell's font color, as an ARGB hex string, equals `expected`.
pub fn assert_cell_font_color_eq<S: SheetView>(
    expected: &str,
    sheet: &S,
    coordinate: &str,
) -> Result<()> {
    with_style(sheet, coordinate, |style, _| {
        ensure_eq(expected, style.font.color.to_argb_hex().as_str(), || {
            format!("{} cell font color does not equal expected value", coordinate)
        })
    })
}

/// Assert the cell's font is italic.
pub fn assert_cell_font_italic<S: SheetView>(sheet: &S, coordinate: &str) -> Result<()> {
    with_style(sheet, coordinate, |style, _| {
        ensure(style.font.italic, || {
            format!("{} cell style is not italic", coordinate)
        })
    })
}

/// Assert the cell's font has a single underline. Double and accounting
/// underlines fail.
pub fn assert_cell_font_underline<S: SheetView>(sheet: &S, coordinate: &str) -> Result<()> {
    with_style(sheet, coordinate, |style, _| {
        ensure(style.font.underline == Underline::Single, || {
            format!("{} cell style is not underline", coordinate)
        })
    })
}

/// Assert the cell's horizontal alignment. The failure names the coordinate
/// the cell reports for itself.
pub fn assert_cell_horizontal_alignment_eq<S: SheetView>(
    expected: HorizontalAlignment,
    sheet: &S,
    coordinate: &str,
) -> Result<()> {
    with_style(sheet, coordinate, |style, cell| {
        ensure_eq(expected, style.alignment.horizontal, || {
            format!(
                "{} cell horizontal alignment does not equal expected value",
                reported_coordinate(cell, coordinate)
            )
        })
    })
}

/// Assert the cell's vertical alignment. The failure names the coordinate the
/// cell reports for itself.
pub fn assert_cell_vertical_alignment_eq<S: SheetView>(
    expected: VerticalAlignment,
    sheet: &S,
    coordinate: &str,
) -> Result<()> {
    with_style(sheet, coordinate, |style, cell| {
        ensure_eq(expected, style.alignment.vertical, || {
            format!(
                "{} cell vertical alignment does not equal expected value",
                reported_coordinate(cell, coordinate)
            )
        })
    })
}

/// Assert the cell wraps its text.
pub fn assert_cell_wrap_text<S: SheetView>(sheet: &S, coordinate: &str) -> Result<()> {
    with_style(sheet, coordinate, |style, _| {
        ensure(style.alignment.wrap_text, || {
            format!("{} cell does not have wrap text", coordinate)
        })
    })
}

/// Assert the cell's fill start and end colors. The start color is checked
/// first and a mismatch there is the one reported.
pub fn assert_cell_background_color_eq<S: SheetView>(
    start_color: &str,
    end_color: &str,
    sheet: &S,
    coordinate: &str,
) -> Result<()> {
    with_style(sheet, coordinate, |style, _| {
        ensure_eq(start_color, style.fill.start_color.to_argb_hex().as_str(), || {
            format!(
                "{} cell background start color does not equal expected value",
                coordinate
            )
        })?;
        ensure_eq(end_color, style.fill.end_color.to_argb_hex().as_str(), || {
            format!(
                "{} cell background end color does not equal expected value",
                coordinate
            )
        })
    })
}
