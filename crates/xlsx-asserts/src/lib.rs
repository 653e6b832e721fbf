//! # xlsx-asserts
//!
//! Assertions for the contents and formatting of XLSX spreadsheets, for use
//! in test suites.
//!
//! Each assertion takes the expected value(s), a sheet and a coordinate, and
//! returns `Ok(())` when the check holds or [`Error::Failed`] with a message
//! naming the cell. A coordinate the sheet cannot resolve fails the same way.
//!
//! ## Features
//!
//! - Cell values, with rich text compared by its plain text
//! - Font color, italic and single underline
//! - Horizontal and vertical alignment, wrap text
//! - Background fill colors for one cell or a whole range
//! - Column widths, row and column counts, merged ranges
//!
//! ## Example
//!
//! ```rust
//! use xlsx_asserts::prelude::*;
//!
//! let mut sheet = Worksheet::new("Sheet1");
//! sheet.insert_value("A1", "regular font").unwrap();
//! sheet
//!     .set_cell_style("C1", Style::new().horizontal(HorizontalAlignment::Center))
//!     .unwrap();
//!
//! assert_cell_value_eq("regular font", &sheet, "A1").unwrap();
//! assert_cell_horizontal_alignment_eq(HorizontalAlignment::Center, &sheet, "C1").unwrap();
//! assert_cell_empty(&sheet, "B7").unwrap();
//!
//! let err = assert_cell_value_eq("bold font", &sheet, "A1").unwrap_err();
//! assert_eq!(
//!     err.as_failure().unwrap().message,
//!     "A1 cell value does not equal expected value"
//! );
//! ```
//!
//! Sheets are usually loaded from disk with [`load_active_sheet`]:
//!
//! ```rust,no_run
//! use xlsx_asserts::prelude::*;
//!
//! let sheet = load_active_sheet("tests/fixtures/example.xlsx").unwrap();
//! assert_cell_font_color_eq("FF34A853", &sheet, "B1").unwrap();
//! assert_column_width_eq(57.29, &sheet, "C").unwrap();
//! ```

pub mod cell;
pub mod error;
pub mod prelude;
pub mod range;
pub mod sheet;
pub mod view;


pub use cell::{
    assert_cell_background_color_eq, assert_cell_empty, assert_cell_font_color_eq,
    assert_cell_font_italic, assert_cell_font_underline, assert_cell_horizontal_alignment_eq,
    assert_cell_value_eq, assert_cell_vertical_alignment_eq, assert_cell_wrap_text,
};
pub use error::{AssertionFailure, Error, Result};
pub use range::assert_cells_background_color_eq;
pub use sheet::{
    assert_cells_merged, assert_column_width_eq, assert_sheet_columns_count,
    assert_sheet_rows_count,
};
pub use view::{CellView, SheetView};

// Re-export the model so callers need only this crate
pub use xlsx_asserts_core as model;
pub use xlsx_asserts_core::{
    Cell, CellAddress, CellRange, CellValue, Color, Fill, FontStyle, HorizontalAlignment,
    PatternType, RichText, Style, Underline, VerticalAlignment, Workbook, Worksheet,
};

#[cfg(feature = "xlsx")]
pub use xlsx_asserts_reader::{XlsxError, XlsxReader, XlsxResult};

/// Load an XLSX file and return the sheet that was active when it was saved.
///
/// Loader errors are returned as they are; they are not assertion failures.
#[cfg(feature = "xlsx")]
pub fn load_active_sheet<P: AsRef<std::path::Path>>(path: P) -> XlsxResult<Worksheet> {
    let path = path.as_ref();
    let workbook = XlsxReader::read_file(path)?;
    log::debug!(
        "loaded {} with {} sheet(s), active index {}",
        path.display(),
        workbook.sheet_count(),
        workbook.active_index()
    );
    Ok(workbook.into_active_worksheet()?)
}
