//! # annum-io
//!
//! Read daily CSV time series into date-keyed form. Bridges the external
//! table format (one row per observation: ISO date, numeric value, label)
//! into the [`DailySeries`] map the rest of annum consumes, applying
//! first-wins aggregation for duplicate dates.

mod error;
mod reader;
mod series;

pub use error::IoError;
pub use reader::{ReaderConfig, read_csv};
pub use series::{DailySeries, DayValue};
