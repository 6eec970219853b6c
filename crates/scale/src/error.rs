//! Error types for the annum-scale crate.

/// Error type for all fallible operations in the annum-scale crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleError {
    /// Returned when a quantization domain is empty or not finite.
    #[error("empty domain: [{lo}, {hi}) (need finite lo < hi)")]
    EmptyDomain {
        /// Lower bound that was provided.
        lo: f64,
        /// Upper bound that was provided.
        hi: f64,
    },

    /// Returned when a scale is requested with zero buckets.
    #[error("bucket count must be at least 1")]
    ZeroBuckets,

    /// Returned when a domain is derived from a slice with no finite values.
    #[error("no finite values to derive a domain from")]
    EmptyData,
}
