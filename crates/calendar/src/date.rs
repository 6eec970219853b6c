//! Gregorian civil date with derived weekday and ordinal arithmetic.

use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 unused,
/// index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// 0-based ordinal on which each month starts in a common year
/// (index 0 unused, index 1 = January starts at ordinal 0, ...).
pub(crate) const MONTH_START0: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Sakamoto month adjustment table for weekday computation.
const SAKAMOTO: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Returns `true` if `year` is a Gregorian leap year.
///
/// Divisible by 4, except century years, which must be divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given month of the given year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH[month as usize])
}

/// Returns the total number of days in the given year (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for CivilDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CivilDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl CivilDate {
    /// Creates a new `CivilDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month or day is invalid for the
    /// given year (February 29 is accepted only in leap years).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns January 1 of the given year.
    pub fn year_start(year: i32) -> Self {
        Self {
            year,
            month: 1,
            day: 1,
        }
    }

    /// Returns December 31 of the given year.
    pub fn year_end(year: i32) -> Self {
        Self {
            year,
            month: 12,
            day: 31,
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the weekday as an index, 0 = Sunday through 6 = Saturday.
    ///
    /// Computed with Sakamoto's congruence; valid over the whole proleptic
    /// Gregorian calendar, negative years included.
    pub fn day_of_week(self) -> u8 {
        let mut y = self.year;
        if self.month < 3 {
            y -= 1;
        }
        let m = SAKAMOTO[(self.month - 1) as usize];
        let sum = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + m + self.day as i32;
        sum.rem_euclid(7) as u8
    }

    /// Returns the 0-based ordinal of this date within its year
    /// (January 1 = 0, December 31 = 364 or 365).
    pub fn day_of_year0(self) -> u16 {
        let mut ord = MONTH_START0[self.month as usize] + self.day as u16 - 1;
        if self.month > 2 && is_leap_year(self.year) {
            ord += 1;
        }
        ord
    }

    /// Returns the next calendar day.
    ///
    /// Month and year boundaries are handled automatically; December 31
    /// wraps to January 1 of the following year.
    pub fn next(self) -> Self {
        // new() validated the date, so days_in_month cannot fail here.
        let max_day = days_in_month(self.year, self.month).expect("stored month is valid");
        if self.day < max_day {
            Self {
                year: self.year,
                month: self.month,
                day: self.day + 1,
            }
        } else if self.month < 12 {
            Self {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        } else {
            Self::year_start(self.year + 1)
        }
    }
}
