//! Column width and row/column count checks.
//!
//! Fixtures: `example.xlsx`, `example_merged.xlsx`

use crate::{failure_message, fixtures};
use pretty_assertions::assert_eq;
use xlsx_asserts::prelude::*;

#[test]
fn test_column_width() {
    let fixture = fixtures::example();
    let sheet = fixture.sheet();

    assert_column_width_eq(57.29, &sheet, "C").unwrap();
    assert_column_width_eq(14.43, &sheet, "D").unwrap();
    assert_eq!(
        failure_message(assert_column_width_eq(50.0, &sheet, "C")),
        "C column width does not equal expected value"
    );
}

#[test]
fn test_rows_count() {
    let fixture = fixtures::example();
    let sheet = fixture.sheet();

    assert_sheet_rows_count(3, &sheet).unwrap();
    assert_eq!(
        failure_message(assert_sheet_rows_count(10, &sheet)),
        "Not empty rows count does not equal expected value"
    );
}

#[test]
fn test_columns_count() {
    let fixture = fixtures::example();
    assert_sheet_columns_count(4, &fixture.sheet()).unwrap();
    assert_eq!(
        failure_message(assert_sheet_columns_count(3, &fixture.sheet())),
        "Not empty columns count does not equal expected value"
    );

    // Only the anchor of a merged region holds a value
    let merged = fixtures::example_merged();
    assert_sheet_columns_count(1, &merged.sheet()).unwrap();
    assert_sheet_rows_count(1, &merged.sheet()).unwrap();
}
