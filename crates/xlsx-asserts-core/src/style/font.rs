//! Font settings of a cell format or rich text run

use std::fmt;

use super::Color;

/// One `<font>` entry: the face, size and decorations of some text
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontStyle {
    pub name: String,
    /// Size in points
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub underline: Underline,
    /// [`Color::Auto`] when the font carries no `<color>`
    pub color: Color,
}

impl Default for FontStyle {
    /// Calibri 11 with no decorations, which is what a new workbook uses
    fn default() -> Self {
        Self {
            name: String::from("Calibri"),
            size: 11.0,
            bold: false,
            italic: false,
            underline: Underline::default(),
            color: Color::Auto,
        }
    }
}

impl FontStyle {
    /// Same font with the bold flag replaced
    pub fn with_bold(self, bold: bool) -> Self {
        Self { bold, ..self }
    }
}

/// How text is underlined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
    /// Runs the full width of the cell
    SingleAccounting,
    DoubleAccounting,
}

impl Underline {
    /// Read the `val` of a `<u>` element. `<u/>` with no value is a single
    /// underline; anything unrecognised counts as none.
    pub fn from_xlsx(val: Option<&str>) -> Self {
        let Some(val) = val else {
            return Underline::Single;
        };
        [
            Underline::Single,
            Underline::Double,
            Underline::SingleAccounting,
            Underline::DoubleAccounting,
        ]
        .into_iter()
        .find(|u| u.to_string() == val)
        .unwrap_or(Underline::None)
    }
}

impl fmt::Display for Underline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Underline::None => "none",
            Underline::Single => "single",
            Underline::Double => "double",
            Underline::SingleAccounting => "singleAccounting",
            Underline::DoubleAccounting => "doubleAccounting",
        })
    }
}
