//! Error types for the annum-calendar crate.

/// Error type for all fallible operations in the annum-calendar crate.
///
/// This enum covers validation failures for month numbers and
/// day-within-month values, and parse failures for ISO `YYYY-MM-DD`
/// date strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a string does not parse as an ISO `YYYY-MM-DD` date.
    #[error("invalid ISO date {input:?}: {reason}")]
    InvalidIsoDate {
        /// The string that failed to parse.
        input: String,
        /// Description of what was wrong with it.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 30,
            month: 2,
            max_day: 29,
        };
        assert_eq!(err.to_string(), "invalid day: 30 for month 2 (max 29)");
    }

    #[test]
    fn error_invalid_iso_date() {
        let err = CalendarError::InvalidIsoDate {
            input: "2016-1".to_string(),
            reason: "expected three '-'-separated fields".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid ISO date \"2016-1\": expected three '-'-separated fields"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_clone() {
        let err = CalendarError::InvalidMonth { month: 0 };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
