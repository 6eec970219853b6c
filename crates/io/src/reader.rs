//! CSV reader configuration and loading.

use std::path::Path;

use annum_calendar::CivilDate;
use tracing::{debug, info};

use crate::error::IoError;
use crate::series::DailySeries;

/// Configuration for reading a daily series from a CSV file.
///
/// Use the builder methods (`with_*`) to customise column names. The
/// [`Default`] implementation expects `date`, `value`, and `label`
/// columns; the label column is optional and missing labels come out
/// empty.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Header name of the ISO `YYYY-MM-DD` date column.
    date_col: String,
    /// Header name of the numeric value column.
    value_col: String,
    /// Optional header name of the label column.
    label_col: Option<String>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            date_col: "date".into(),
            value_col: "value".into(),
            label_col: Some("label".into()),
        }
    }
}

impl ReaderConfig {
    /// Set the date column name.
    pub fn with_date_col(mut self, name: impl Into<String>) -> Self {
        self.date_col = name.into();
        self
    }

    /// Set the value column name.
    pub fn with_value_col(mut self, name: impl Into<String>) -> Self {
        self.value_col = name.into();
        self
    }

    /// Set the label column name, or `None` to skip labels entirely.
    pub fn with_label_col(mut self, name: Option<impl Into<String>>) -> Self {
        self.label_col = name.map(Into::into);
        self
    }
}

/// Finds the index of a named column in the header row.
fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, IoError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| IoError::MissingColumn {
            name: name.to_string(),
        })
}

/// Reads a CSV file into a [`DailySeries`].
///
/// The header row is used to locate the configured columns. Each data row
/// contributes one `(date, value, label)` observation; when several rows
/// share a date, the first row wins and the rest are skipped. A label
/// column configured but absent from the file is an error; configure
/// `None` to load label-less files.
///
/// # Errors
///
/// Returns [`IoError`] if the file is missing, a configured column is not
/// in the header, any row fails to parse, or the file has no data rows.
pub fn read_csv(path: &Path, config: &ReaderConfig) -> Result<DailySeries, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let date_idx = column_index(&headers, &config.date_col)?;
    let value_idx = column_index(&headers, &config.value_col)?;
    let label_idx = match &config.label_col {
        Some(name) => Some(column_index(&headers, name)?),
        None => None,
    };

    let mut series = DailySeries::new();
    let mut n_duplicates = 0usize;

    for (row, record) in reader.records().enumerate() {
        // Header is line 1, first data row is line 2.
        let line = row + 2;
        let record = record?;

        let invalid = |reason: String| IoError::InvalidRow { line, reason };

        let date_field = record
            .get(date_idx)
            .ok_or_else(|| invalid("date field missing".to_string()))?;
        let date: CivilDate = date_field
            .trim()
            .parse()
            .map_err(|e: annum_calendar::CalendarError| invalid(e.to_string()))?;

        let value_field = record
            .get(value_idx)
            .ok_or_else(|| invalid("value field missing".to_string()))?;
        let value: f64 = value_field
            .trim()
            .parse()
            .map_err(|_| invalid(format!("value {value_field:?} is not a number")))?;

        let label = label_idx
            .and_then(|i| record.get(i))
            .unwrap_or("")
            .trim()
            .to_string();

        if !series.insert_first(date, value, label) {
            debug!(%date, line, "duplicate date, keeping first value");
            n_duplicates += 1;
        }
    }

    if series.is_empty() {
        return Err(IoError::EmptySeries);
    }

    info!(
        path = %path.display(),
        n_days = series.len(),
        n_duplicates,
        "daily series loaded"
    );
    Ok(series)
}
