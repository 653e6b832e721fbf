//! Shared string table (`xl/sharedStrings.xml`)

use std::io::{BufReader, Read};

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use super::decode_excel_escapes;
use crate::error::{XlsxError, XlsxResult};
use crate::styles::apply_font_property;
use xlsx_asserts_core::style::{ColorScheme, FontStyle};
use xlsx_asserts_core::{CellValue, RichText, TextRun};

/// Read every `<si>` entry. Entries made of `<r>` runs become
/// [`CellValue::RichText`]; the rest become plain strings.
pub(crate) fn read_shared_strings_xml<R: Read>(
    reader: R,
    scheme: &ColorScheme,
) -> XlsxResult<Vec<CellValue>> {
    let mut xml_reader = Reader::from_reader(BufReader::new(reader));
    // Run text such as " font" keeps its leading space
    xml_reader.trim_text(false);

    let mut buf = Vec::new();
    let mut strings = Vec::new();

    let mut plain = String::new();
    let mut runs: Vec<TextRun> = Vec::new();
    let mut run_text: Option<String> = None;
    let mut run_font: Option<FontStyle> = None;
    let mut in_rpr = false;
    let mut in_t = false;
    let mut in_phonetic = false;

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"si" => {
                    plain.clear();
                    runs.clear();
                }
                b"r" => {
                    run_text = Some(String::new());
                    run_font = None;
                }
                b"rPr" => {
                    in_rpr = true;
                    run_font = Some(FontStyle::default());
                }
                b"rPh" => in_phonetic = true,
                b"t" if !in_phonetic => in_t = true,
                _ => {
                    if in_rpr {
                        if let Some(font) = run_font.as_mut() {
                            apply_font_property(font, &e, scheme);
                        }
                    }
                }
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"si" => strings.push(CellValue::string("")),
                b"rPr" => run_font = Some(FontStyle::default()),
                _ => {
                    if in_rpr {
                        if let Some(font) = run_font.as_mut() {
                            apply_font_property(font, &e, scheme);
                        }
                    }
                }
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"si" => {
                    let value = if runs.is_empty() {
                        CellValue::String(decode_excel_escapes(&plain))
                    } else {
                        CellValue::RichText(RichText::new(std::mem::take(&mut runs)))
                    };
                    strings.push(value);
                }
                b"r" => {
                    if let Some(text) = run_text.take() {
                        runs.push(TextRun::new(decode_excel_escapes(&text), run_font.take()));
                    }
                }
                b"rPr" => in_rpr = false,
                b"rPh" => in_phonetic = false,
                b"t" => in_t = false,
                _ => {}
            },
            Ok(Event::Text(e)) if in_t => {
                let text = e.unescape().map_err(XlsxError::Xml)?;
                match run_text.as_mut() {
                    Some(run) => run.push_str(&text),
                    None => plain.push_str(&text),
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(XlsxError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(strings)
}
