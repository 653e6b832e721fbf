//! # xlsx-asserts-core
//!
//! Read-only spreadsheet model used by the `xlsx-asserts` test helpers.
//!
//! This crate provides the types the assertions inspect:
//! - [`CellValue`] and [`RichText`] - Cell values, including formatted text runs
//! - [`CellAddress`] and [`CellRange`] - Cell addressing and ranges
//! - [`Style`] - Cell formatting (font, fill, alignment)
//! - [`Workbook`], [`Worksheet`] - The loaded document
//!
//! ## Example
//!
//! ```rust
//! use xlsx_asserts_core::{CellValue, Worksheet};
//!
//! let mut sheet = Worksheet::new("Sheet1");
//! sheet.insert_value("A1", CellValue::string("Hello")).unwrap();
//!
//! let cell = sheet.cell("A1").unwrap().unwrap();
//! assert_eq!(cell.value.plain_text(), "Hello");
//! assert!(sheet.cell("B7").unwrap().is_none());
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod style;
pub mod workbook;
pub mod worksheet;

pub use cell::{
    column_string_from_index, range_boundaries, Cell, CellAddress, CellRange, CellValue,
    RichText, TextRun,
};
pub use column::{ColumnDimension, DEFAULT_COLUMN_WIDTH};
pub use error::{Error, Result};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

pub use style::{
    Alignment, Color, ColorScheme, Fill, FontStyle, HorizontalAlignment, PatternType, Style,
    Underline, VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
