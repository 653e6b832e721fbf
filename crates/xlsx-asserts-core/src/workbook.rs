//! Workbook type - the loaded document

use crate::error::{Error, Result};
use crate::worksheet::Worksheet;

/// A workbook: ordered worksheets plus the sheet that was active on save.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    /// Worksheets in tab order
    worksheets: Vec<Worksheet>,
    /// Active sheet index
    active_index: usize,
}

impl Workbook {
    /// Create an empty workbook with no worksheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Append a worksheet, returning its index. Sheet names are unique.
    pub fn add_worksheet(&mut self, worksheet: Worksheet) -> Result<usize> {
        if self.worksheets.iter().any(|ws| ws.name() == worksheet.name()) {
            return Err(Error::other(format!(
                "duplicate sheet name '{}'",
                worksheet.name()
            )));
        }
        self.worksheets.push(worksheet);
        Ok(self.worksheets.len() - 1)
    }

    /// Get the active sheet index
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Set the active sheet index
    pub fn set_active_index(&mut self, index: usize) -> Result<()> {
        if index >= self.worksheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.worksheets.len()));
        }
        self.active_index = index;
        Ok(())
    }

    /// The worksheet that was selected when the file was saved
    pub fn active_worksheet(&self) -> Result<&Worksheet> {
        self.worksheets
            .get(self.active_index)
            .ok_or(Error::SheetOutOfBounds(self.active_index, self.worksheets.len()))
    }

    /// Take ownership of the active worksheet
    pub fn into_active_worksheet(mut self) -> Result<Worksheet> {
        if self.active_index >= self.worksheets.len() {
            return Err(Error::SheetOutOfBounds(
                self.active_index,
                self.worksheets.len(),
            ));
        }
        Ok(self.worksheets.swap_remove(self.active_index))
    }
}
