//! # annum-scale
//!
//! Fixed quantization of numeric values into color buckets. A
//! [`QuantizeScale`] subdivides a half-open domain `[lo, hi)` into a fixed
//! number of equal intervals (ten by default, matching the renderer's
//! color ramps) and maps any value, in or out of the domain, onto a bucket
//! index.
//!
//! ```ignore
//! use annum_scale::QuantizeScale;
//!
//! let scale = QuantizeScale::new(-0.05, 0.05).unwrap();
//! assert_eq!(scale.bucket(0.0), 5);
//! assert_eq!(scale.bucket(99.0), 9); // clamped
//! ```

mod error;
mod quantize;

pub use error::ScaleError;
pub use quantize::{DEFAULT_BUCKETS, QuantizeScale};
