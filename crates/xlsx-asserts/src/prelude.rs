//! Prelude module - common imports for xlsx-asserts users
//!
//! ```rust
//! use xlsx_asserts::prelude::*;
//! ```

pub use crate::{
    assert_cell_background_color_eq,
    assert_cell_empty,
    assert_cell_font_color_eq,
    assert_cell_font_italic,
    assert_cell_font_underline,
    assert_cell_horizontal_alignment_eq,
    assert_cell_value_eq,
    assert_cell_vertical_alignment_eq,
    assert_cell_wrap_text,
    assert_cells_background_color_eq,
    assert_cells_merged,
    assert_column_width_eq,
    assert_sheet_columns_count,
    assert_sheet_rows_count,

    // Errors
    AssertionFailure,
    Error,
    Result,

    // Views
    CellView,
    SheetView,

    // Model types
    CellValue,
    Color,
    Fill,
    HorizontalAlignment,
    Style,
    Underline,
    VerticalAlignment,
    Workbook,
    Worksheet,
};

#[cfg(feature = "xlsx")]
pub use crate::{load_active_sheet, XlsxError};
