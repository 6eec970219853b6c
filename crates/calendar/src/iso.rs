//! ISO `YYYY-MM-DD` parsing and formatting for [`CivilDate`].

use std::fmt;
use std::str::FromStr;

use crate::date::CivilDate;
use crate::error::CalendarError;

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

impl FromStr for CivilDate {
    type Err = CalendarError;

    /// Parses an ISO `YYYY-MM-DD` date string.
    ///
    /// The month and day fields must be one or two digits; the parsed date
    /// is validated like [`CivilDate::new`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CalendarError::InvalidIsoDate {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut fields = s.splitn(3, '-');
        let year = fields.next().ok_or_else(|| invalid("empty string"))?;
        let month = fields
            .next()
            .ok_or_else(|| invalid("expected three '-'-separated fields"))?;
        let day = fields
            .next()
            .ok_or_else(|| invalid("expected three '-'-separated fields"))?;

        let year: i32 = year
            .parse()
            .map_err(|_| invalid("year is not a number"))?;
        let month: u8 = month
            .parse()
            .map_err(|_| invalid("month is not a number"))?;
        let day: u8 = day.parse().map_err(|_| invalid("day is not a number"))?;

        CivilDate::new(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let date: CivilDate = "2016-01-31".parse().unwrap();
        assert_eq!(date, CivilDate::new(2016, 1, 31).unwrap());
    }

    #[test]
    fn parse_single_digit_fields() {
        let date: CivilDate = "2016-1-5".parse().unwrap();
        assert_eq!(date, CivilDate::new(2016, 1, 5).unwrap());
    }

    #[test]
    fn display_zero_pads() {
        let date = CivilDate::new(2016, 1, 5).unwrap();
        assert_eq!(date.to_string(), "2016-01-05");
    }

    #[test]
    fn roundtrip() {
        for s in ["2000-02-29", "2015-12-31", "1970-01-01"] {
            let date: CivilDate = s.parse().unwrap();
            assert_eq!(date.to_string(), s);
        }
    }

    #[test]
    fn parse_missing_fields() {
        let err = "2016-01".parse::<CivilDate>().unwrap_err();
        assert!(matches!(err, CalendarError::InvalidIsoDate { .. }));
    }

    #[test]
    fn parse_non_numeric() {
        let err = "2016-ab-01".parse::<CivilDate>().unwrap_err();
        assert!(matches!(err, CalendarError::InvalidIsoDate { .. }));
    }

    #[test]
    fn parse_invalid_calendar_date() {
        // Well-formed string, impossible date: surfaces the validation error.
        let err = "2015-02-29".parse::<CivilDate>().unwrap_err();
        assert!(matches!(err, CalendarError::InvalidDay { .. }));
    }

    #[test]
    fn parse_empty() {
        let err = "".parse::<CivilDate>().unwrap_err();
        assert!(matches!(err, CalendarError::InvalidIsoDate { .. }));
    }
}
