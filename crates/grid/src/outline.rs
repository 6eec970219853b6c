//! Month boundary outlines.

use annum_calendar::{CalendarError, CivilDate, days_in_month};

use crate::coord::GridCoord;
use crate::mapper::grid_coord;

/// Number of day rows in the grid.
const N_ROWS: f64 = 7.0;

/// Closed rectilinear outline around all grid cells of one month.
///
/// Exactly eight vertices in pixel space, each edge purely horizontal or
/// vertical, traced so the polygon hugs the partial week columns at the
/// start and end of the month. The last vertex connects back to the first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthOutline {
    vertices: [(f64, f64); 8],
}

impl MonthOutline {
    /// Returns the eight vertices in path order.
    pub fn vertices(&self) -> &[(f64, f64); 8] {
        &self.vertices
    }
}

/// Builds the outline around the cell span from `first` to `last`.
///
/// `first` and `last` are the grid cells of the span's first and last day;
/// every column strictly between them is covered top to bottom. When
/// `first` and `last` share a column the outline degenerates to that
/// column's rectangle (some vertices coincide, the loop stays valid).
pub fn span_outline(first: GridCoord, last: GridCoord, cell_size: f64) -> MonthOutline {
    let cs = cell_size;
    let (w0, d0) = (first.week() as f64, first.dow() as f64);
    let (w1, d1) = (last.week() as f64, last.dow() as f64);

    MonthOutline {
        vertices: [
            ((w0 + 1.0) * cs, d0 * cs),
            (w0 * cs, d0 * cs),
            (w0 * cs, N_ROWS * cs),
            (w1 * cs, N_ROWS * cs),
            (w1 * cs, (d1 + 1.0) * cs),
            ((w1 + 1.0) * cs, (d1 + 1.0) * cs),
            ((w1 + 1.0) * cs, 0.0),
            ((w0 + 1.0) * cs, 0.0),
        ],
    }
}

/// Builds the outline around all cells of the given month.
///
/// The span runs from the month's first day to its last day (one day
/// before the 1st of the following month).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn month_outline(year: i32, month: u8, cell_size: f64) -> Result<MonthOutline, CalendarError> {
    let first = CivilDate::new(year, month, 1)?;
    let last = CivilDate::new(year, month, days_in_month(year, month)?)?;
    Ok(span_outline(grid_coord(first), grid_coord(last), cell_size))
}
