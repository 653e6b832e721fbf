//! Range fan-out of the background color check

use crate::cell::assert_cell_background_color_eq;
use crate::error::Result;
use crate::view::SheetView;

/// Assert every cell of `range` ("A1:C3") has the given fill start and end
/// colors.
///
/// Cells are visited column by column, top to bottom within a column. The
/// first failing cell ends the check and is the one the failure names.
pub fn assert_cells_background_color_eq<S: SheetView>(
    start_color: &str,
    end_color: &str,
    sheet: &S,
    range: &str,
) -> Result<()> {
    let ((start_col, start_row), (end_col, end_row)) = sheet.range_boundaries(range)?;
    log::trace!(
        "checking background of {} ({} columns x {} rows)",
        range,
        end_col - start_col + 1,
        end_row - start_row + 1
    );

    for col in start_col..=end_col {
        let letters = sheet.column_string(col)?;
        for row in start_row..=end_row {
            let coordinate = format!("{}{}", letters, row);
            assert_cell_background_color_eq(start_color, end_color, sheet, &coordinate)?;
        }
    }
    Ok(())
}
