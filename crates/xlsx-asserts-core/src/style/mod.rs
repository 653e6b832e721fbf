//! Cell styling types
//!
//! This module contains the formatting a cell can be asserted on:
//! - [`Style`] - Complete cell style
//! - [`FontStyle`] - Font settings
//! - [`Fill`] - Background fill
//! - [`Alignment`] - Text alignment
//! - [`Color`] - Color representation
//! - [`ColorScheme`] - Colors of the workbook theme

mod alignment;
mod color;
mod fill;
mod font;
mod theme;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use color::{
    Color, ARGB_BLACK, ARGB_BLUE, ARGB_GREEN, ARGB_RED, ARGB_WHITE, ARGB_YELLOW,
};
pub use fill::{Fill, PatternType};
pub use font::{FontStyle, Underline};
pub use theme::ColorScheme;

/// Complete cell style
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Font settings
    pub font: FontStyle,
    /// Fill/background settings
    pub fill: Fill,
    /// Text alignment
    pub alignment: Alignment,
}

impl Style {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    /// Set font to italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.font.italic = italic;
        self
    }

    /// Set the underline style
    pub fn underline(mut self, underline: Underline) -> Self {
        self.font.underline = underline;
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font.color = color;
        self
    }

    /// Set the background fill
    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    /// Set horizontal alignment
    pub fn horizontal(mut self, align: HorizontalAlignment) -> Self {
        self.alignment.horizontal = align;
        self
    }

    /// Set vertical alignment
    pub fn vertical(mut self, align: VerticalAlignment) -> Self {
        self.alignment.vertical = align;
        self
    }

    /// Enable or disable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.alignment.wrap_text = wrap;
        self
    }
}
