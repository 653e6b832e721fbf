//! Worksheet part parsing (`xl/worksheets/sheetN.xml`)

use std::io::{BufReader, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use super::decode_excel_escapes;
use crate::error::{XlsxError, XlsxResult};
use xlsx_asserts_core::style::Style;
use xlsx_asserts_core::{Cell, CellAddress, CellRange, CellValue, Worksheet};

/// Attributes and content of the `<c>` element being read
#[derive(Default)]
struct PendingCell {
    reference: Option<String>,
    cell_type: Option<String>,
    style_index: Option<usize>,
    value: Option<String>,
    inline_text: Option<String>,
}

impl PendingCell {
    fn from_attrs(e: &BytesStart<'_>) -> Self {
        let mut cell = Self::default();
        for attr in e.attributes().flatten() {
            match attr.key.as_ref() {
                b"r" => cell.reference = attr.unescape_value().ok().map(|s| s.to_string()),
                b"t" => cell.cell_type = attr.unescape_value().ok().map(|s| s.to_string()),
                b"s" => {
                    cell.style_index = attr
                        .unescape_value()
                        .ok()
                        .and_then(|s| s.parse::<usize>().ok())
                }
                _ => {}
            }
        }
        cell
    }
}

/// Which text node the parser is inside
#[derive(Clone, Copy, PartialEq)]
enum TextTarget {
    None,
    Value,
    InlineText,
}

pub(crate) fn read_worksheet_xml<R: Read>(
    reader: R,
    worksheet: &mut Worksheet,
    shared_strings: &[CellValue],
    cell_styles: &[Style],
) -> XlsxResult<()> {
    let mut xml_reader = Reader::from_reader(BufReader::new(reader));
    xml_reader.trim_text(false);

    let mut buf = Vec::new();

    // Column used for cells that omit their `r` attribute
    let mut current_row: u32 = 0;
    let mut next_col: u16 = 0;

    let mut pending: Option<PendingCell> = None;
    let mut target = TextTarget::None;
    let mut in_inline_str = false;
    let mut in_phonetic = false;

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"row" => {
                    if let Some(r) = row_number(&e) {
                        current_row = r.saturating_sub(1);
                    }
                    next_col = 0;
                }
                b"c" => pending = Some(PendingCell::from_attrs(&e)),
                b"v" if pending.is_some() => target = TextTarget::Value,
                b"is" if pending.is_some() => in_inline_str = true,
                b"rPh" => in_phonetic = true,
                b"t" if in_inline_str && !in_phonetic => target = TextTarget::InlineText,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"row" => {
                    // A row without cells still advances the implicit row
                    current_row = row_number(&e).unwrap_or(current_row + 1);
                    next_col = 0;
                }
                b"c" => {
                    let cell = PendingCell::from_attrs(&e);
                    next_col = store_cell(
                        worksheet,
                        cell,
                        current_row,
                        next_col,
                        shared_strings,
                        cell_styles,
                    )?;
                }
                b"col" => read_column(worksheet, &e),
                b"mergeCell" => read_merge(worksheet, &e),
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"c" => {
                    if let Some(cell) = pending.take() {
                        next_col = store_cell(
                            worksheet,
                            cell,
                            current_row,
                            next_col,
                            shared_strings,
                            cell_styles,
                        )?;
                    }
                }
                b"row" => current_row += 1,
                b"v" | b"t" => target = TextTarget::None,
                b"is" => in_inline_str = false,
                b"rPh" => in_phonetic = false,
                _ => {}
            },
            Ok(Event::Text(e)) if target != TextTarget::None => {
                let text = e.unescape().map_err(XlsxError::Xml)?;
                if let Some(cell) = pending.as_mut() {
                    let slot = match target {
                        TextTarget::Value => &mut cell.value,
                        _ => &mut cell.inline_text,
                    };
                    slot.get_or_insert_with(String::new).push_str(&text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(XlsxError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn row_number(e: &BytesStart<'_>) -> Option<u32> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"r")
        .and_then(|attr| attr.unescape_value().ok())
        .and_then(|s| s.parse::<u32>().ok())
}

/// Store one cell and return the column the next reference-less cell uses.
fn store_cell(
    worksheet: &mut Worksheet,
    cell: PendingCell,
    row: u32,
    next_col: u16,
    shared_strings: &[CellValue],
    cell_styles: &[Style],
) -> XlsxResult<u16> {
    let addr = match cell.reference.as_deref() {
        Some(reference) => CellAddress::parse(reference).map_err(|e| {
            XlsxError::BadCell(format!("Invalid cell reference '{}': {}", reference, e))
        })?,
        None => CellAddress::new(row, next_col),
    };

    let value = cell_value(&cell, shared_strings)?;

    let style = match cell.style_index {
        Some(idx) => cell_styles
            .get(idx)
            .cloned()
            .ok_or_else(|| XlsxError::BadCell(format!("Style index {} out of bounds", idx)))?,
        None => Style::default(),
    };

    worksheet.insert_cell(Cell::with_style(addr, value, style));
    Ok(addr.col.saturating_add(1))
}

/// Resolve the typed value of a cell. Formula cells contribute their cached
/// result, which `<v>` carries like any other value.
fn cell_value(cell: &PendingCell, shared_strings: &[CellValue]) -> XlsxResult<CellValue> {
    if cell.cell_type.as_deref() == Some("inlineStr") {
        return Ok(cell
            .inline_text
            .as_deref()
            .map(|t| CellValue::String(decode_excel_escapes(t)))
            .unwrap_or_default());
    }

    let raw = match cell.value.as_deref() {
        Some(raw) => raw,
        None => return Ok(CellValue::Empty),
    };

    Ok(match cell.cell_type.as_deref() {
        // Shared string
        Some("s") => {
            let idx: usize = raw.trim().parse().map_err(|_| {
                XlsxError::BadCell(format!("Invalid shared string index: {}", raw))
            })?;
            shared_strings
                .get(idx)
                .cloned()
                .ok_or_else(|| {
                    XlsxError::BadCell(format!("Shared string index {} out of bounds", idx))
                })?
        }

        Some("b") => CellValue::Boolean(raw == "1" || raw.eq_ignore_ascii_case("true")),

        Some("e") => CellValue::Error(raw.to_string()),

        // Formula string result
        Some("str") => CellValue::String(decode_excel_escapes(raw)),

        // Number (default type or explicit "n")
        None | Some("n") => match raw.trim().parse::<f64>() {
            Ok(n) => CellValue::Number(n),
            Err(_) => CellValue::String(raw.to_string()),
        },

        // ISO dates and unknown types keep their text
        Some(_) => CellValue::String(raw.to_string()),
    })
}

fn read_column(worksheet: &mut Worksheet, e: &BytesStart<'_>) {
    let mut min: Option<u16> = None;
    let mut max: Option<u16> = None;
    let mut width: Option<f64> = None;

    for attr in e.attributes().flatten() {
        let val = match attr.unescape_value() {
            Ok(v) => v,
            Err(_) => continue,
        };
        match attr.key.as_ref() {
            b"min" => min = val.parse().ok(),
            b"max" => max = val.parse().ok(),
            b"width" => width = val.parse().ok(),
            _ => {}
        }
    }

    // min/max are 1-based in XLSX
    if let (Some(min), Some(max), Some(width)) = (min, max, width) {
        for col in min.max(1)..=max.min(xlsx_asserts_core::MAX_COLS) {
            worksheet.set_column_width(col - 1, width);
        }
    }
}

fn read_merge(worksheet: &mut Worksheet, e: &BytesStart<'_>) {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() != b"ref" {
            continue;
        }
        let reference = String::from_utf8_lossy(&attr.value).to_string();
        let merged = CellRange::parse(&reference).and_then(|range| worksheet.merge_cells(&range));
        if let Err(err) = merged {
            log::warn!(
                "skipping merged region '{}' on sheet '{}': {}",
                reference,
                worksheet.name(),
                err
            );
        }
    }
}
