//! Column dimensions

/// Width Excel reports for a column with no custom width
pub const DEFAULT_COLUMN_WIDTH: f64 = 8.43;

/// Width of one column, as `<col>` declares it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnDimension {
    /// Column index (0-based)
    pub index: u16,
    /// `None` when no `<col>` gives the column a width
    pub width: Option<f64>,
}

impl ColumnDimension {
    pub fn new(index: u16) -> Self {
        Self { index, width: None }
    }

    /// Effective width, falling back to [`DEFAULT_COLUMN_WIDTH`]
    pub fn width(&self) -> f64 {
        self.width.unwrap_or(DEFAULT_COLUMN_WIDTH)
    }
}
