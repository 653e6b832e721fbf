//! Alignment and wrap text checks. Fixture: `example.xlsx`

use crate::{failure_message, fixtures};
use pretty_assertions::assert_eq;
use xlsx_asserts::prelude::*;

#[test]
fn test_horizontal_alignment() {
    let fixture = fixtures::example();
    let sheet = fixture.sheet();

    assert_cell_horizontal_alignment_eq(HorizontalAlignment::Center, &sheet, "C1").unwrap();
    assert_eq!(
        failure_message(assert_cell_horizontal_alignment_eq(
            HorizontalAlignment::Center,
            &sheet,
            "C2"
        )),
        "C2 cell horizontal alignment does not equal expected value"
    );
}

#[test]
fn test_vertical_alignment() {
    let fixture = fixtures::example();
    let sheet = fixture.sheet();

    assert_cell_vertical_alignment_eq(VerticalAlignment::Center, &sheet, "C2").unwrap();
    assert_eq!(
        failure_message(assert_cell_vertical_alignment_eq(
            VerticalAlignment::Center,
            &sheet,
            "C1"
        )),
        "C1 cell vertical alignment does not equal expected value"
    );
}

#[test]
fn test_wrap_text() {
    let fixture = fixtures::example();
    let sheet = fixture.sheet();

    assert_cell_wrap_text(&sheet, "D1").unwrap();
    assert_eq!(
        failure_message(assert_cell_wrap_text(&sheet, "C1")),
        "C1 cell does not have wrap text"
    );
}
