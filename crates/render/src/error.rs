//! Error types for annum-render.

/// Error type for all fallible operations in the annum-render crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// Returned when a document is requested for an empty series.
    #[error("nothing to render: series contains no dates")]
    NoYears,

    /// Returned when the configured cell size is not a positive finite
    /// number.
    #[error("invalid cell size: {value} (must be positive and finite)")]
    InvalidCellSize {
        /// The offending cell size.
        value: f64,
    },
}
