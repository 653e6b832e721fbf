//! styles.xml parsing: fonts, fills and cell formats (`cellXfs`)

use std::io::{BufReader, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};
use xlsx_asserts_core::style::{
    Alignment, Color, ColorScheme, Fill, FontStyle, HorizontalAlignment, PatternType, Style,
    Underline, VerticalAlignment,
};

/// Cell formats from styles.xml, indexed by a cell's `s` attribute
#[derive(Debug)]
pub(crate) struct ParsedStyles {
    pub cell_styles: Vec<Style>,
}

impl Default for ParsedStyles {
    fn default() -> Self {
        Self {
            cell_styles: vec![Style::default()],
        }
    }
}

/// A `<xf>` record waiting for its optional `<alignment>` child
struct PendingXf {
    font_id: usize,
    fill_id: usize,
    alignment: Alignment,
}

/// Read `cellXfs` with their fonts and fills. Theme colors resolve against
/// `scheme`.
pub(crate) fn read_styles_xml<R: Read>(
    reader: R,
    scheme: &ColorScheme,
) -> XlsxResult<ParsedStyles> {
    let mut xml_reader = Reader::from_reader(BufReader::new(reader));
    xml_reader.trim_text(true);

    let mut buf = Vec::new();

    let mut fonts: Vec<FontStyle> = Vec::new();
    let mut fills: Vec<Fill> = Vec::new();
    let mut cell_xfs: Vec<Style> = Vec::new();

    let mut in_fonts = false;
    let mut in_fills = false;
    let mut in_cell_xfs = false;

    let mut current_font: Option<FontStyle> = None;
    let mut current_fill: Option<Fill> = None;
    let mut current_xf: Option<PendingXf> = None;

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"fonts" => in_fonts = true,
                b"fills" => in_fills = true,
                b"cellXfs" => in_cell_xfs = true,
                b"font" if in_fonts => current_font = Some(FontStyle::default()),
                b"fill" if in_fills => current_fill = Some(Fill::default()),
                b"patternFill" => {
                    if let Some(fill) = current_fill.as_mut() {
                        apply_pattern_type(fill, &e);
                    }
                }
                b"xf" if in_cell_xfs => current_xf = Some(parse_xf(&e)),
                _ => {
                    if let Some(font) = current_font.as_mut() {
                        apply_font_property(font, &e, scheme);
                    } else if let Some(fill) = current_fill.as_mut() {
                        apply_fill_color(fill, &e, scheme);
                    }
                }
            },

            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"font" if in_fonts => fonts.push(FontStyle::default()),
                b"fill" if in_fills => fills.push(Fill::default()),
                b"patternFill" => {
                    if let Some(fill) = current_fill.as_mut() {
                        apply_pattern_type(fill, &e);
                    }
                }
                b"xf" if in_cell_xfs => {
                    let xf = parse_xf(&e);
                    cell_xfs.push(resolve_style(xf, &fonts, &fills));
                }
                b"alignment" => {
                    if let Some(xf) = current_xf.as_mut() {
                        apply_alignment(&mut xf.alignment, &e);
                    }
                }
                _ => {
                    if let Some(font) = current_font.as_mut() {
                        apply_font_property(font, &e, scheme);
                    } else if let Some(fill) = current_fill.as_mut() {
                        apply_fill_color(fill, &e, scheme);
                    }
                }
            },

            Ok(Event::End(e)) => match e.name().as_ref() {
                b"fonts" => in_fonts = false,
                b"fills" => in_fills = false,
                b"cellXfs" => in_cell_xfs = false,
                b"font" => {
                    if let Some(font) = current_font.take() {
                        fonts.push(font);
                    }
                }
                b"fill" => {
                    if let Some(fill) = current_fill.take() {
                        fills.push(fill);
                    }
                }
                b"xf" => {
                    if let Some(xf) = current_xf.take() {
                        cell_xfs.push(resolve_style(xf, &fonts, &fills));
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

    if cell_xfs.is_empty() {
        return Ok(ParsedStyles::default());
    }

    Ok(ParsedStyles {
        cell_styles: cell_xfs,
    })
}

fn parse_xf(e: &BytesStart<'_>) -> PendingXf {
    let mut font_id = 0usize;
    let mut fill_id = 0usize;
    for attr in e.attributes().flatten() {
        let parsed = attr
            .unescape_value()
            .ok()
            .and_then(|s| s.parse::<usize>().ok());
        match attr.key.as_ref() {
            b"fontId" => font_id = parsed.unwrap_or(0),
            b"fillId" => fill_id = parsed.unwrap_or(0),
            _ => {}
        }
    }
    PendingXf {
        font_id,
        fill_id,
        alignment: Alignment::default(),
    }
}

fn resolve_style(xf: PendingXf, fonts: &[FontStyle], fills: &[Fill]) -> Style {
    Style {
        font: fonts.get(xf.font_id).cloned().unwrap_or_default(),
        fill: fills.get(xf.fill_id).copied().unwrap_or_default(),
        alignment: xf.alignment,
    }
}

fn apply_pattern_type(fill: &mut Fill, e: &BytesStart<'_>) {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"patternType" {
            if let Some(pattern) = attr
                .unescape_value()
                .ok()
                .and_then(|v| PatternType::from_xlsx(&v))
            {
                fill.pattern = pattern;
            }
        }
    }
}

fn apply_fill_color(fill: &mut Fill, e: &BytesStart<'_>, scheme: &ColorScheme) {
    match e.name().as_ref() {
        b"fgColor" => fill.start_color = parse_color_attrs(e, scheme),
        b"bgColor" => fill.end_color = parse_color_attrs(e, scheme),
        _ => {}
    }
}

fn apply_alignment(align: &mut Alignment, e: &BytesStart<'_>) {
    for attr in e.attributes().flatten() {
        let val = match attr.unescape_value() {
            Ok(v) => v,
            Err(_) => continue,
        };
        match attr.key.as_ref() {
            b"horizontal" => {
                if let Ok(h) = val.parse::<HorizontalAlignment>() {
                    align.horizontal = h;
                }
            }
            b"vertical" => {
                if let Ok(v) = val.parse::<VerticalAlignment>() {
                    align.vertical = v;
                }
            }
            b"wrapText" => align.wrap_text = is_truthy(&val),
            _ => {}
        }
    }
}

/// Apply one child of `<font>` (styles.xml) or `<rPr>` (a rich text run).
pub(crate) fn apply_font_property(
    font: &mut FontStyle,
    e: &BytesStart<'_>,
    scheme: &ColorScheme,
) {
    match e.name().as_ref() {
        b"b" => font.bold = flag_value(e),
        b"i" => font.italic = flag_value(e),
        b"u" => font.underline = Underline::from_xlsx(val_attr(e).as_deref()),
        b"sz" => {
            if let Some(size) = val_attr(e).and_then(|v| v.parse::<f64>().ok()) {
                font.size = size;
            }
        }
        b"name" | b"rFont" => {
            if let Some(name) = val_attr(e) {
                font.name = name;
            }
        }
        b"color" => font.color = parse_color_attrs(e, scheme),
        _ => {}
    }
}

/// Parse a CT_Color element. Priority: rgb > theme > indexed > auto.
///
/// Theme references come back resolved to ARGB with their exact tint.
pub(crate) fn parse_color_attrs(e: &BytesStart<'_>, scheme: &ColorScheme) -> Color {
    let mut rgb: Option<Color> = None;
    let mut theme: Option<u8> = None;
    let mut tint: Option<f64> = None;
    let mut indexed: Option<u8> = None;

    for attr in e.attributes().flatten() {
        let val = match attr.unescape_value() {
            Ok(v) => v,
            Err(_) => continue,
        };
        match attr.key.as_ref() {
            b"rgb" => rgb = Color::from_hex(&val),
            b"theme" => theme = val.parse::<u8>().ok(),
            b"tint" => tint = val.parse::<f64>().ok(),
            b"indexed" => indexed = val.parse::<u8>().ok(),
            _ => {}
        }
    }

    if let Some(color) = rgb {
        return color;
    }

    if let Some(index) = theme {
        return scheme.resolve(index, tint.unwrap_or(0.0));
    }

    indexed.map(Color::Indexed).unwrap_or(Color::Auto)
}

fn val_attr(e: &BytesStart<'_>) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"val")
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.to_string()))
}

/// Boolean font flags (`<b/>`, `<i val="0"/>`) default to on
fn flag_value(e: &BytesStart<'_>) -> bool {
    val_attr(e).map_or(true, |v| is_truthy(&v))
}

fn is_truthy(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}
