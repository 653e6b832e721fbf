//! Theme part (`xl/theme/theme1.xml`): only the color scheme is read

use std::io::{BufReader, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};
use xlsx_asserts_core::{Color, ColorScheme};

/// Read the first `<a:clrScheme>` of a theme part. Slots the part leaves out
/// keep their [`ColorScheme::default`] color.
pub(crate) fn read_theme_xml<R: Read>(reader: R) -> XlsxResult<ColorScheme> {
    let mut xml_reader = Reader::from_reader(BufReader::new(reader));
    xml_reader.trim_text(true);

    let mut buf = Vec::new();
    let mut scheme = ColorScheme::default();
    let mut in_scheme = false;
    let mut slot: Option<usize> = None;

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.local_name();
                if name.as_ref() == b"clrScheme" {
                    in_scheme = true;
                } else if in_scheme {
                    match ColorScheme::slot_index(name.as_ref()) {
                        Some(index) => slot = Some(index),
                        None => apply_slot_color(&mut scheme, slot, &e),
                    }
                }
            }
            Ok(Event::Empty(e)) if in_scheme => apply_slot_color(&mut scheme, slot, &e),
            Ok(Event::End(e)) => {
                let name = e.local_name();
                if name.as_ref() == b"clrScheme" {
                    // Later schemes belong to extraClrSchemeLst
                    break;
                }
                if ColorScheme::slot_index(name.as_ref()).is_some() {
                    slot = None;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(XlsxError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(scheme)
}

/// `<a:srgbClr val>` or `<a:sysClr lastClr>` inside a scheme slot
fn apply_slot_color(scheme: &mut ColorScheme, slot: Option<usize>, e: &BytesStart<'_>) {
    let Some(index) = slot else {
        return;
    };
    let key: &[u8] = match e.local_name().as_ref() {
        b"srgbClr" => b"val",
        b"sysClr" => b"lastClr",
        _ => return,
    };
    let rgb = e
        .attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok())
        .and_then(|hex| Color::from_hex(&hex))
        .map(|color| color.to_rgb());
    match rgb {
        Some(rgb) => scheme.set(index, rgb),
        None => log::warn!(
            "theme color slot {} has no readable color; keeping the default",
            ColorScheme::SLOTS[index]
        ),
    }
}
