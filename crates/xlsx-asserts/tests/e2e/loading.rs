//! Loading behavior of `load_active_sheet`.

use crate::common::{styles_xml, workbook_package, DEFAULT_FILLS};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use xlsx_asserts::prelude::*;

fn sheet_with_a1(value: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData><row r="1"><c r="A1" t="inlineStr"><is><t>{}</t></is></c></row></sheetData></worksheet>"#,
        value
    )
}

fn two_sheet_workbook(active_tab: usize) -> crate::common::Fixture {
    let styles = styles_xml(
        &[r#"<font><sz val="11"/><name val="Calibri"/></font>"#],
        &DEFAULT_FILLS,
        &[r#"<xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>"#],
    );
    let shared_strings =
        r#"<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"/>"#;
    workbook_package(
        "two_sheets.xlsx",
        &[
            ("First", sheet_with_a1("first sheet")),
            ("Second", sheet_with_a1("second sheet")),
        ],
        active_tab,
        &styles,
        shared_strings,
        None,
    )
}

#[test]
fn test_loads_the_active_sheet() {
    let fixture = two_sheet_workbook(1);
    let sheet = fixture.sheet();

    assert_eq!(sheet.name(), "Second");
    assert_cell_value_eq("second sheet", &sheet, "A1").unwrap();
}

#[test]
fn test_out_of_range_active_tab_uses_first_sheet() {
    let fixture = two_sheet_workbook(7);
    let sheet = fixture.sheet();

    assert_eq!(sheet.name(), "First");
    assert_cell_value_eq("first sheet", &sheet, "A1").unwrap();
}

#[test]
fn test_missing_file_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    let result = load_active_sheet(dir.path().join("missing.xlsx"));
    assert!(matches!(result, Err(XlsxError::Io(_))));
}

#[test]
fn test_corrupt_file_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corrupt.xlsx");
    std::fs::write(&path, b"definitely not a zip archive").unwrap();

    let result = load_active_sheet(&path);
    assert!(matches!(result, Err(XlsxError::Zip(_))));
}
