//! Font color, italic and underline checks.
//!
//! Fixtures: `example.xlsx`, `example_italic.xlsx`, `example_underline.xlsx`

use crate::{failure_message, fixtures};
use pretty_assertions::assert_eq;
use xlsx_asserts::model::style::{ARGB_BLACK, ARGB_GREEN};
use xlsx_asserts::prelude::*;

#[test]
fn test_font_color() {
    let fixture = fixtures::example();
    let sheet = fixture.sheet();

    assert_cell_font_color_eq(ARGB_BLACK, &sheet, "A1").unwrap();
    assert_cell_font_color_eq(ARGB_BLACK, &sheet, "A2").unwrap();
    assert_cell_font_color_eq("FF34A853", &sheet, "B1").unwrap();
    assert_cell_font_color_eq("FFEA4335", &sheet, "B2").unwrap();
    assert_cell_font_color_eq("FFFBBC04", &sheet, "B3").unwrap();

    assert_eq!(
        failure_message(assert_cell_font_color_eq(ARGB_GREEN, &sheet, "A1")),
        "A1 cell font color does not equal expected value"
    );
}

#[test]
fn test_theme_font_colors_use_the_workbook_theme() {
    let fixture = fixtures::example_theme();
    let sheet = fixture.sheet();

    assert_cell_font_color_eq("FF1F77B4", &sheet, "A1").unwrap();
    // 1F77B4 lightened by 0.39997558519241921, each channel truncated
    assert_cell_font_color_eq("FF78ADD1", &sheet, "B1").unwrap();
    // The built-in Office accent1 is not what this workbook uses
    assert_eq!(
        failure_message(assert_cell_font_color_eq("FF4472C4", &sheet, "A1")),
        "A1 cell font color does not equal expected value"
    );
}

#[test]
fn test_italic() {
    let fixture = fixtures::example_italic();
    let sheet = fixture.sheet();

    assert_cell_font_italic(&sheet, "A3").unwrap();
    assert_cell_font_italic(&sheet, "B3").unwrap();
    // Rich text starting with an italic run
    assert_cell_font_italic(&sheet, "B2").unwrap();

    assert_eq!(
        failure_message(assert_cell_font_italic(&sheet, "A1")),
        "A1 cell style is not italic"
    );
    assert_eq!(
        failure_message(assert_cell_font_italic(&sheet, "A2")),
        "A2 cell style is not italic"
    );
    // Rich text ending with an italic run
    assert_eq!(
        failure_message(assert_cell_font_italic(&sheet, "B1")),
        "B1 cell style is not italic"
    );
}

#[test]
fn test_underline() {
    let fixture = fixtures::example_underline();
    let sheet = fixture.sheet();

    assert_cell_font_underline(&sheet, "A3").unwrap();
    assert_cell_font_underline(&sheet, "B3").unwrap();
    assert_cell_font_underline(&sheet, "B2").unwrap();

    assert_eq!(
        failure_message(assert_cell_font_underline(&sheet, "A1")),
        "A1 cell style is not underline"
    );
    assert_eq!(
        failure_message(assert_cell_font_underline(&sheet, "A2")),
        "A2 cell style is not underline"
    );
    assert_eq!(
        failure_message(assert_cell_font_underline(&sheet, "B1")),
        "B1 cell style is not underline"
    );
    assert_eq!(
        failure_message(assert_cell_font_underline(&sheet, "C1")),
        "C1 cell style is not underline"
    );
}
