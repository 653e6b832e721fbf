//! XLSX reader

mod shared_strings;
mod theme;
mod worksheet;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};
use crate::styles::{read_styles_xml, ParsedStyles};
use shared_strings::read_shared_strings_xml;
use theme::read_theme_xml;
use worksheet::read_worksheet_xml;
use xlsx_asserts_core::{CellValue, ColorScheme, Workbook, Worksheet};

/// Decode Excel's `_xHHHH_` escape sequences in strings.
///
/// Excel uses this format to encode special characters in XML:
/// - `_x000d_` = CR (carriage return)
/// - `_x000a_` = LF (line feed)
/// - `_x0009_` = Tab
/// - `_x005f_` = Underscore (escaped underscore)
fn decode_excel_escapes(s: &str) -> String {
    if !s.contains("_x") {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find("_x") {
        result.push_str(&rest[..pos]);
        let candidate = &rest[pos..];

        let decoded = candidate
            .get(2..6)
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .filter(|_| candidate.as_bytes().get(6) == Some(&b'_'))
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .and_then(char::from_u32);

        match decoded {
            Some(c) => {
                result.push(c);
                rest = &candidate[7..];
            }
            None => {
                result.push_str("_x");
                rest = &candidate[2..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// A `<sheet>` entry of workbook.xml
#[derive(Debug)]
struct SheetEntry {
    name: String,
    r_id: String,
}

/// What workbook.xml says about the sheets
#[derive(Debug, Default)]
struct WorkbookInfo {
    sheets: Vec<SheetEntry>,
    active_tab: usize,
}

/// Parts workbook.xml.rels points at
#[derive(Debug, Default)]
struct WorkbookRels {
    /// Relationship id to worksheet part path
    sheets: HashMap<String, String>,
    theme: Option<String>,
}

/// XLSX file reader
pub struct XlsxReader;

impl XlsxReader {
    /// Read a workbook from a file path
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<Workbook> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Read a workbook from a reader
    pub fn read<R: Read + Seek>(reader: R) -> XlsxResult<Workbook> {
        let mut archive = zip::ZipArchive::new(reader)?;

        // Verify this is an XLSX file
        if archive.by_name("[Content_Types].xml").is_err() {
            return Err(XlsxError::InvalidFormat(
                "Missing [Content_Types].xml".into(),
            ));
        }

        let info = Self::read_workbook_xml(&mut archive)?;
        let rels = Self::read_workbook_rels(&mut archive)?;
        let scheme = Self::read_theme(&mut archive, rels.theme.as_deref())?;
        let shared_strings = Self::read_shared_strings(&mut archive, &scheme)?;
        let styles = Self::read_styles(&mut archive, &scheme)?;

        let mut workbook = Workbook::new();

        for entry in &info.sheets {
            let path = rels.sheets.get(&entry.r_id).ok_or_else(|| {
                XlsxError::InvalidFormat(format!(
                    "sheet '{}' has no worksheet relationship '{}'",
                    entry.name, entry.r_id
                ))
            })?;

            let mut sheet = Worksheet::new(entry.name.as_str());
            {
                let file = archive
                    .by_name(path)
                    .map_err(|_| XlsxError::MissingPart(path.to_string()))?;
                read_worksheet_xml(file, &mut sheet, &shared_strings, &styles.cell_styles)?;
            }

            log::debug!(
                "read sheet '{}' from {} ({} cells, {} merged regions)",
                sheet.name(),
                path,
                sheet.cells().count(),
                sheet.merged_regions().len()
            );
            workbook.add_worksheet(sheet)?;
        }

        if info.active_tab < workbook.sheet_count() {
            workbook.set_active_index(info.active_tab)?;
        } else if !workbook.is_empty() {
            log::warn!(
                "active tab {} is out of range for {} sheets; using the first sheet",
                info.active_tab,
                workbook.sheet_count()
            );
        }

        Ok(workbook)
    }

    /// Read the color scheme of the theme part, if the workbook has one
    fn read_theme<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
        path: Option<&str>,
    ) -> XlsxResult<ColorScheme> {
        let Some(path) = path else {
            return Ok(ColorScheme::default());
        };
        match archive.by_name(path) {
            Ok(file) => read_theme_xml(file),
            Err(_) => {
                log::warn!("theme part {} is missing; using the default colors", path);
                Ok(ColorScheme::default())
            }
        }
    }

    /// Read the shared strings table
    fn read_shared_strings<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
        scheme: &ColorScheme,
    ) -> XlsxResult<Vec<CellValue>> {
        match archive.by_name("xl/sharedStrings.xml") {
            Ok(file) => read_shared_strings_xml(file, scheme),
            // No shared strings is valid
            Err(_) => Ok(Vec::new()),
        }
    }

    fn read_styles<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
        scheme: &ColorScheme,
    ) -> XlsxResult<ParsedStyles> {
        match archive.by_name("xl/styles.xml") {
            Ok(file) => read_styles_xml(file, scheme),
            Err(_) => Ok(ParsedStyles::default()),
        }
    }

    /// Read workbook.xml to get sheet names, rIds and the active tab
    fn read_workbook_xml<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<WorkbookInfo> {
        let file = archive
            .by_name("xl/workbook.xml")
            .map_err(|_| XlsxError::MissingPart("xl/workbook.xml".into()))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut info = WorkbookInfo::default();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"sheet" => {
                        if let Some(entry) = Self::parse_sheet_entry(&e) {
                            info.sheets.push(entry);
                        }
                    }
                    b"workbookView" => {
                        for attr in e.attributes().flatten() {
                            if attr.key.as_ref() == b"activeTab" {
                                info.active_tab = attr
                                    .unescape_value()
                                    .ok()
                                    .and_then(|s| s.parse::<usize>().ok())
                                    .unwrap_or(0);
                            }
                        }
                    }
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(info)
    }

    fn parse_sheet_entry(e: &BytesStart<'_>) -> Option<SheetEntry> {
        let mut name = None;
        let mut r_id = None;

        for attr in e.attributes().flatten() {
            match attr.key.as_ref() {
                b"name" => name = attr.unescape_value().ok().map(|s| s.to_string()),
                b"r:id" => r_id = attr.unescape_value().ok().map(|s| s.to_string()),
                _ => {}
            }
        }

        Some(SheetEntry {
            name: name?,
            r_id: r_id?,
        })
    }

    /// Read workbook.xml.rels to get the worksheet and theme part paths
    fn read_workbook_rels<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<WorkbookRels> {
        let file = archive
            .by_name("xl/_rels/workbook.xml.rels")
            .map_err(|_| XlsxError::MissingPart("xl/_rels/workbook.xml.rels".into()))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut rels = WorkbookRels::default();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e))
                    if e.name().as_ref() == b"Relationship" =>
                {
                    let mut id = None;
                    let mut target = None;
                    let mut rel_type = None;

                    for attr in e.attributes().flatten() {
                        let val = attr.unescape_value().ok().map(|s| s.to_string());
                        match attr.key.as_ref() {
                            b"Id" => id = val,
                            b"Target" => target = val,
                            b"Type" => rel_type = val,
                            _ => {}
                        }
                    }

                    if let (Some(id), Some(target), Some(rel_type)) = (id, target, rel_type) {
                        if rel_type.ends_with("/worksheet") {
                            rels.sheets.insert(id, resolve_part_path(&target));
                        } else if rel_type.ends_with("/theme") && rels.theme.is_none() {
                            rels.theme = Some(resolve_part_path(&target));
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }
}

/// Resolve a relationship target from workbook.xml.rels to a package path.
/// Relative targets are relative to the `xl/` folder.
fn resolve_part_path(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("xl/{}", target.trim_start_matches("./")),
    }
}
