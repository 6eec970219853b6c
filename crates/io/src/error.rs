//! Error types for annum-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the annum-io crate.
///
/// This enum covers missing input files, CSV-level failures, header
/// problems, malformed rows, and calendar validation issues encountered
/// while loading a daily series.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a required column is not present in the header row.
    #[error("column '{name}' not found in header")]
    MissingColumn {
        /// Name of the missing column.
        name: String,
    },

    /// Returned when a data row cannot be parsed.
    #[error("invalid row at line {line}: {reason}")]
    InvalidRow {
        /// 1-based line number within the file (the header is line 1).
        line: usize,
        /// Description of what was wrong with the row.
        reason: String,
    },

    /// Wraps an error originating from the annum-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },

    /// Returned when a file yields no data rows at all.
    #[error("input contains no data rows")]
    EmptySeries,
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<annum_calendar::CalendarError> for IoError {
    fn from(e: annum_calendar::CalendarError) -> Self {
        IoError::Calendar {
            reason: e.to_string(),
        }
    }
}
