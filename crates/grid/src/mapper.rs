//! Date-to-grid mapping.

use annum_calendar::CivilDate;

use crate::coord::GridCoord;

/// Returns the 0-based week-of-year column for a date.
///
/// The week containing January 1 is week 0 regardless of which weekday
/// January 1 falls on; each later week begins on the following Monday.
/// This is the classic `%W`-style week number, paired throughout this
/// crate with Sunday-first day rows, which yields the stair-stepped
/// column layout of calendar heatmaps.
///
/// Total over all valid dates. The result is at most 53, and at most 52
/// except in leap years that start on a Sunday.
pub fn week_index(date: CivilDate) -> u16 {
    let jan1 = CivilDate::year_start(date.year());
    let offset = (jan1.day_of_week() + 6) % 7;
    (date.day_of_year0() + offset as u16) / 7
}

/// Maps a date to its (week, weekday) cell in the year grid.
pub fn grid_coord(date: CivilDate) -> GridCoord {
    GridCoord::new(week_index(date), date.day_of_week())
}

/// Returns the pixel origin of a date's cell for the given cell size.
///
/// Equivalent to `grid_coord(date).origin(cell_size)`.
pub fn cell_origin(date: CivilDate, cell_size: f64) -> (f64, f64) {
    grid_coord(date).origin(cell_size)
}
