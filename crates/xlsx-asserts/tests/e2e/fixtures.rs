//! The workbooks the scenario tests run against.
//!
//! ```text
//! example.xlsx
//!   |A           |B      |C                   |D           |
//! 1 |mixed font  |green  |horizontal centering|wrap text   |
//! 2 |regular font|red    |vertical centering  |width 14.43 |
//! 3 |            |yellow |width 57.29         |            |
//!
//! example_background.xlsx (fill colors)
//!   |A    |B     |C     |D     |E     |
//! 1 |green|green |green |      |      |
//! 2 |     |yellow|yellow|yellow|yellow|
//! 3 |red  |red   |red   |red   |blue  |
//!
//! example_merged.xlsx
//!   |A        |B  |
//! 1 |merged A1:B2 |
//! 2 |             |
//!
//! example_theme.xlsx (theme accent1 = 1F77B4, accent2 = D62728)
//!   |A      |B              |C              |
//! 1 |accent1|accent1 + 40%  |accent2 fill   |
//!
//! example_falsy.xlsx
//!   |A    |B   |C  |
//! 1 |0    |3   |"0"|
//! 2 |FALSE|TRUE|   |
//! ```

use crate::common::{styles_xml, Fixture, SheetBuilder, DEFAULT_FILLS};

const FONT_REGULAR: &str = r#"<font><sz val="11"/><name val="Calibri"/></font>"#;
const FONT_BOLD: &str = r#"<font><b/><sz val="11"/><name val="Calibri"/></font>"#;
const FONT_ITALIC: &str = r#"<font><i/><sz val="11"/><name val="Calibri"/></font>"#;
const FONT_BOLD_ITALIC: &str = r#"<font><b/><i/><sz val="11"/><name val="Calibri"/></font>"#;
const FONT_UNDERLINE: &str = r#"<font><u/><sz val="11"/><name val="Calibri"/></font>"#;
const FONT_UNDERLINE_ITALIC: &str = r#"<font><i/><u/><sz val="11"/><name val="Calibri"/></font>"#;
const FONT_DOUBLE_UNDERLINE: &str =
    r#"<font><u val="double"/><sz val="11"/><name val="Calibri"/></font>"#;

/// Cell formats that only pick a font, one per font in order
fn font_xfs(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            format!(
                r#"<xf numFmtId="0" fontId="{}" fillId="0" borderId="0" xfId="0" applyFont="1"/>"#,
                i
            )
        })
        .collect()
}

fn as_strs(items: &[String]) -> Vec<&str> {
    items.iter().map(String::as_str).collect()
}

pub fn example() -> Fixture {
    let fonts = [
        FONT_REGULAR,
        r#"<font><sz val="11"/><color rgb="FF34A853"/><name val="Calibri"/></font>"#,
        r#"<font><sz val="11"/><color rgb="FFEA4335"/><name val="Calibri"/></font>"#,
        r#"<font><sz val="11"/><color rgb="FFFBBC04"/><name val="Calibri"/></font>"#,
    ];
    let mut xfs = font_xfs(fonts.len());
    for alignment in [
        r#"<alignment horizontal="center"/>"#,
        r#"<alignment vertical="center"/>"#,
        r#"<alignment wrapText="1"/>"#,
    ] {
        xfs.push(format!(
            r#"<xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0" applyAlignment="1">{}</xf>"#,
            alignment
        ));
    }
    let styles = styles_xml(&fonts, &DEFAULT_FILLS, &as_strs(&xfs));

    SheetBuilder::new(&styles)
        .rich("A1", &[("<b/>", "mixed"), ("", " font")], 0)
        .text("A2", "regular font", 0)
        .text("B1", "green", 1)
        .text("B2", "red", 2)
        .text("B3", "yellow", 3)
        .text("C1", "horizontal centering", 4)
        .text("C2", "vertical centering", 5)
        .text("C3", "width 57.29", 0)
        .text("D1", "wrap text", 6)
        .text("D2", "width 14.43", 0)
        .column(3, 57.29)
        .column(4, 14.43)
        .build("example.xlsx")
}

pub fn example_background() -> Fixture {
    let solid = |argb: &str| {
        format!(
            r#"<fill><patternFill patternType="solid"><fgColor rgb="{0}"/><bgColor rgb="{0}"/></patternFill></fill>"#,
            argb
        )
    };
    let mut fills: Vec<String> = DEFAULT_FILLS.iter().map(|f| f.to_string()).collect();
    for argb in ["FF00FF00", "FFFFFF00", "FFFF0000", "FF0000FF"] {
        fills.push(solid(argb));
    }

    let mut xfs = vec![r#"<xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>"#.to_string()];
    for fill_id in 2..=5 {
        xfs.push(format!(
            r#"<xf numFmtId="0" fontId="0" fillId="{}" borderId="0" xfId="0" applyFill="1"/>"#,
            fill_id
        ));
    }
    let styles = styles_xml(&[FONT_REGULAR], &as_strs(&fills), &as_strs(&xfs));

    let (green, yellow, red, blue) = (1, 2, 3, 4);
    let mut builder = SheetBuilder::new(&styles);
    for coordinate in ["A1", "B1", "C1"] {
        builder = builder.styled(coordinate, green);
    }
    for coordinate in ["B2", "C2", "D2", "E2"] {
        builder = builder.styled(coordinate, yellow);
    }
    for coordinate in ["A3", "B3", "C3", "D3"] {
        builder = builder.styled(coordinate, red);
    }
    builder.styled("E3", blue).build("example_background.xlsx")
}

pub fn example_merged() -> Fixture {
    let styles = styles_xml(&[FONT_REGULAR], &DEFAULT_FILLS, &as_strs(&font_xfs(1)));
    SheetBuilder::new(&styles)
        .text("A1", "merged A1:B2", 0)
        .merge("A1:B2")
        .build("example_merged.xlsx")
}

const THEME: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Brand">
  <a:themeElements>
    <a:clrScheme name="Brand">
      <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
      <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
      <a:dk2><a:srgbClr val="44546A"/></a:dk2>
      <a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
      <a:accent1><a:srgbClr val="1F77B4"/></a:accent1>
      <a:accent2><a:srgbClr val="D62728"/></a:accent2>
      <a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>
      <a:accent4><a:srgbClr val="FFC000"/></a:accent4>
      <a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>
      <a:accent6><a:srgbClr val="70AD47"/></a:accent6>
      <a:hlink><a:srgbClr val="0563C1"/></a:hlink>
      <a:folHlink><a:srgbClr val="954F72"/></a:folHlink>
    </a:clrScheme>
  </a:themeElements>
</a:theme>"#;

pub fn example_theme() -> Fixture {
    let fonts = [
        FONT_REGULAR,
        r#"<font><sz val="11"/><color theme="4"/><name val="Calibri"/></font>"#,
        r#"<font><sz val="11"/><color theme="4" tint="0.39997558519241921"/><name val="Calibri"/></font>"#,
    ];
    let mut fills: Vec<String> = DEFAULT_FILLS.iter().map(|f| f.to_string()).collect();
    fills.push(
        r#"<fill><patternFill patternType="solid"><fgColor theme="5"/><bgColor indexed="64"/></patternFill></fill>"#
            .to_string(),
    );
    let mut xfs = font_xfs(fonts.len());
    xfs.push(
        r#"<xf numFmtId="0" fontId="0" fillId="2" borderId="0" xfId="0" applyFill="1"/>"#
            .to_string(),
    );
    let styles = styles_xml(&fonts, &as_strs(&fills), &as_strs(&xfs));

    SheetBuilder::new(&styles)
        .text("A1", "accent1", 1)
        .text("B1", "accent1 + 40%", 2)
        .text("C1", "accent2 fill", 3)
        .theme(THEME)
        .build("example_theme.xlsx")
}

pub fn example_falsy() -> Fixture {
    let styles = styles_xml(&[FONT_REGULAR], &DEFAULT_FILLS, &as_strs(&font_xfs(1)));
    SheetBuilder::new(&styles)
        .number("A1", 0.0)
        .number("B1", 3.0)
        .text("C1", "0", 0)
        .boolean("A2", false)
        .boolean("B2", true)
        .build("example_falsy.xlsx")
}

/// ```text
///   |A     |B                 |
/// 1 |normal|normal + italic   |
/// 2 |bold  |italic + bold     |
/// 3 |italic|bold italic       |
/// ```
pub fn example_italic() -> Fixture {
    let fonts = [FONT_REGULAR, FONT_BOLD, FONT_ITALIC, FONT_BOLD_ITALIC];
    let styles = styles_xml(&fonts, &DEFAULT_FILLS, &as_strs(&font_xfs(fonts.len())));

    SheetBuilder::new(&styles)
        .text("A1", "normal", 0)
        .text("A2", "bold", 1)
        .text("A3", "italic", 2)
        .rich("B1", &[("", "normal + "), ("<i/>", "italic")], 0)
        .rich("B2", &[("<i/>", "italic + "), ("<b/>", "bold")], 2)
        .text("B3", "bold italic", 3)
        .build("example_italic.xlsx")
}

/// ```text
///   |A         |B                     |C                |
/// 1 |normal    |normal + underlined   |double underlined|
/// 2 |bold      |underlined + bold     |                 |
/// 3 |underlined|underlined italic     |                 |
/// ```
pub fn example_underline() -> Fixture {
    let fonts = [
        FONT_REGULAR,
        FONT_BOLD,
        FONT_UNDERLINE,
        FONT_UNDERLINE_ITALIC,
        FONT_DOUBLE_UNDERLINE,
    ];
    let styles = styles_xml(&fonts, &DEFAULT_FILLS, &as_strs(&font_xfs(fonts.len())));

    SheetBuilder::new(&styles)
        .text("A1", "normal", 0)
        .text("A2", "bold", 1)
        .text("A3", "underlined", 2)
        .rich("B1", &[("", "normal + "), ("<u/>", "underlined")], 0)
        .rich("B2", &[("<u/>", "underlined + "), ("<b/>", "bold")], 2)
        .text("B3", "underlined italic", 3)
        .text("C1", "double underlined", 4)
        .build("example_underline.xlsx")
}
