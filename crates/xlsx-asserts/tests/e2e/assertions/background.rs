//! Background fill checks for single cells and ranges.
//!
//! Fixtures: `example_background.xlsx`, `example_theme.xlsx`

use crate::{failure_message, fixtures};
use pretty_assertions::assert_eq;
use xlsx_asserts::model::style::{
    ARGB_BLACK, ARGB_BLUE, ARGB_GREEN, ARGB_RED, ARGB_WHITE, ARGB_YELLOW,
};
use xlsx_asserts::prelude::*;

#[test]
fn test_cell_background() {
    let fixture = fixtures::example_background();
    let sheet = fixture.sheet();

    assert_cell_background_color_eq(ARGB_GREEN, ARGB_GREEN, &sheet, "A1").unwrap();
    assert_cell_background_color_eq(ARGB_YELLOW, ARGB_YELLOW, &sheet, "B2").unwrap();
    assert_cell_background_color_eq(ARGB_RED, ARGB_RED, &sheet, "C3").unwrap();
    assert_cell_background_color_eq(ARGB_BLUE, ARGB_BLUE, &sheet, "E3").unwrap();

    // Unfilled cells report the default fill colors
    assert_cell_background_color_eq(ARGB_WHITE, ARGB_BLACK, &sheet, "D1").unwrap();
}

#[test]
fn test_theme_fill_uses_the_workbook_theme() {
    let fixture = fixtures::example_theme();
    let sheet = fixture.sheet();

    assert_cell_background_color_eq("FFD62728", ARGB_BLACK, &sheet, "C1").unwrap();
}

#[test]
fn test_cell_background_fails() {
    let fixture = fixtures::example_background();
    let sheet = fixture.sheet();

    assert_eq!(
        failure_message(assert_cell_background_color_eq(
            ARGB_YELLOW,
            ARGB_YELLOW,
            &sheet,
            "D3"
        )),
        "D3 cell background start color does not equal expected value"
    );
}

#[test]
fn test_range_background() {
    let fixture = fixtures::example_background();
    let sheet = fixture.sheet();

    assert_cells_background_color_eq(ARGB_GREEN, ARGB_GREEN, &sheet, "A1:C1").unwrap();
    assert_cells_background_color_eq(ARGB_YELLOW, ARGB_YELLOW, &sheet, "B2:E2").unwrap();
    assert_cells_background_color_eq(ARGB_RED, ARGB_RED, &sheet, "A3:D3").unwrap();
    assert_cells_background_color_eq(ARGB_BLUE, ARGB_BLUE, &sheet, "E3:E3").unwrap();
}

#[test]
fn test_range_background_names_the_failing_cell() {
    let fixture = fixtures::example_background();
    let sheet = fixture.sheet();

    assert_eq!(
        failure_message(assert_cells_background_color_eq(
            ARGB_RED, ARGB_RED, &sheet, "A3:E3"
        )),
        "E3 cell background start color does not equal expected value"
    );
    // Column A is checked top to bottom before column B; A2 is unfilled
    assert_eq!(
        failure_message(assert_cells_background_color_eq(
            ARGB_GREEN, ARGB_GREEN, &sheet, "A1:C3"
        )),
        "A2 cell background start color does not equal expected value"
    );
}
