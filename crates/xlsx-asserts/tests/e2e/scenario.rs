//! The example workbook checked from top to bottom.

use crate::{failure_message, fixtures};
use pretty_assertions::assert_eq;
use xlsx_asserts::prelude::*;

#[test]
fn test_example_sheet_passes_every_assertion() {
    let fixture = fixtures::example();
    let sheet = fixture.sheet();

    assert_cell_value_eq("mixed font", &sheet, "A1").unwrap();
    assert_cell_font_color_eq("FF000000", &sheet, "A1").unwrap();
    assert_cell_horizontal_alignment_eq(HorizontalAlignment::General, &sheet, "A1").unwrap();
    assert_cell_vertical_alignment_eq(VerticalAlignment::Bottom, &sheet, "A1").unwrap();
    assert_cell_value_eq("regular font", &sheet, "A2").unwrap();

    assert_cell_value_eq("green", &sheet, "B1").unwrap();
    assert_cell_font_color_eq("FF34A853", &sheet, "B1").unwrap();

    assert_cell_horizontal_alignment_eq(HorizontalAlignment::Center, &sheet, "C1").unwrap();
    assert_cell_wrap_text(&sheet, "D1").unwrap();

    assert_column_width_eq(57.29, &sheet, "C").unwrap();
    assert_column_width_eq(14.43, &sheet, "D").unwrap();

    assert_sheet_rows_count(3, &sheet).unwrap();
    assert_sheet_columns_count(4, &sheet).unwrap();
}

#[test]
fn test_wrong_font_color_names_the_cell() {
    let fixture = fixtures::example();
    let sheet = fixture.sheet();

    let result = assert_cell_font_color_eq("FF00FF00", &sheet, "B1");
    let err = result.clone().unwrap_err();
    let failure = err.as_failure().unwrap();
    assert_eq!(failure.expected.as_deref(), Some("FF00FF00"));
    assert_eq!(failure.actual.as_deref(), Some("FF34A853"));

    let message = failure_message(result);
    assert!(message.contains("B1"));
    assert_eq!(message, "B1 cell font color does not equal expected value");
}

#[test]
fn test_checks_do_not_change_the_sheet() {
    let fixture = fixtures::example();
    let sheet = fixture.sheet();
    let before = sheet.to_array();

    let _ = assert_cell_value_eq("nope", &sheet, "A1");
    let _ = assert_cells_background_color_eq("FF00FF00", "FF00FF00", &sheet, "A1:D3");
    let _ = assert_cells_merged(&sheet, "A1:B2");

    assert_eq!(sheet.to_array(), before);
    assert_eq!(sheet.merged_regions().len(), 0);
}
