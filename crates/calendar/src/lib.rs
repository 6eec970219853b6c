//! # annum-calendar
//!
//! Pure Gregorian date arithmetic, built from first principles (no date
//! library): leap-year rules, Sakamoto weekday computation, day-of-year
//! ordinals, and year sequencing.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"CivilDate::new()"| B["CivilDate"]
//!     B -->|".next()"| B
//!     B -->|".day_of_week()"| C["0=Sun .. 6=Sat"]
//!     B -->|".day_of_year0()"| D["0 .. 364/365"]
//!     E["\"YYYY-MM-DD\""] -->|"str::parse()"| B
//!     F["year"] -->|"year_sequence()"| G["Vec of CivilDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use annum_calendar::{CivilDate, year_sequence};
//!
//! let date: CivilDate = "2016-01-31".parse().unwrap();
//! assert_eq!(date.day_of_week(), 0); // Sunday
//!
//! let dates = year_sequence(2016);
//! assert_eq!(dates.len(), 366);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Civil date, leap years, weekday and ordinal arithmetic |
//! | `iso` | ISO `YYYY-MM-DD` parsing and formatting |
//! | `sequence` | Full-year date sequence generation |
//! | `error` | Error types |

mod date;
mod error;
mod iso;
mod sequence;

pub use date::{CivilDate, days_in_month, days_in_year, is_leap_year};
pub use error::CalendarError;
pub use sequence::year_sequence;
