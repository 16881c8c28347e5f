//! Core types and numeric primitives for geochronological data reduction
//!
//! This crate holds the pieces shared by the rest of the geochron-stats
//! workspace:
//!
//! - [`error`]: the unified [`Error`] type and [`Result`] alias
//! - [`interpolate`]: fractional-index interpolation with an out-of-bounds
//!   sentinel, plus knot-based linear interpolation
//! - [`nan`]: mean/std/median/percentile/min/max that skip missing values,
//!   over slices or along a matrix axis
//! - [`search`]: nearest-index lookup
//!
//! # Error Conventions
//!
//! Numerical precondition violations are not reported as errors. A zero
//! uncertainty or a query outside a curve's domain yields NaN, infinity or a
//! caller-chosen sentinel. [`Error`] is reserved for structural misuse such
//! as mismatched input lengths.
//!
//! # Example
//!
//! ```rust
//! use geochron_core::{interpolate_at_index, nan::nanmean};
//!
//! let curve = [0.0, 10.0, 20.0, 30.0];
//! assert_eq!(interpolate_at_index(&curve, 1.5, f64::NEG_INFINITY), 15.0);
//! assert_eq!(nanmean(&[1.0, f64::NAN, 3.0]), 2.0);
//! ```

pub mod error;
pub mod interpolate;
pub mod nan;
pub mod search;

pub use error::{Error, Result};
pub use interpolate::{interpolate_at_index, linterp1, linterp1s};
pub use nan::{
    nanmaximum, nanmean, nanmedian, nanminimum, nanpctile, nanrange, nanstd, Axis,
};
pub use search::{find_closest, find_closest_above, find_closest_below};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
