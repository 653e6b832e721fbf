//! Rich text: a string split into runs that each carry their own font

use std::fmt;

use crate::style::FontStyle;

/// A single run of text with optional run-level font
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRun {
    /// Text content of the run
    pub text: String,
    /// Run font (`None` = inherit the cell font)
    pub font: Option<FontStyle>,
}

impl TextRun {
    /// Create a new run
    pub fn new<S: Into<String>>(text: S, font: Option<FontStyle>) -> Self {
        Self {
            text: text.into(),
            font,
        }
    }
}

/// Formatted text made of runs
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RichText {
    /// Runs in display order
    pub runs: Vec<TextRun>,
}

impl RichText {
    /// Create rich text from runs
    pub fn new(runs: Vec<TextRun>) -> Self {
        Self { runs }
    }

    /// Concatenate the run texts, dropping formatting
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            f.write_str(&run.text)?;
        }
        Ok(())
    }
}
