//! Numerical toolkit for geochronological data reduction
//!
//! This umbrella crate re-exports the geochron-stats workspace:
//!
//! - [`geochron_core`]: error type, fractional-index interpolation, NaN-aware
//!   reductions and nearest-index lookup
//! - [`geochron_weighted`]: inverse-variance weighted means with MSWD
//! - [`geochron_sampling`]: rejection sampling from discretized densities
//! - [`geochron_distributions`]: the bilinear-exponential density and interpolated
//!   log-likelihoods
//!
//! # Example
//!
//! ```rust
//! use geochron_stats::prelude::*;
//!
//! // Combine replicate ages
//! let wm = weighted_mean_mswd_corrected(&[66.02, 66.05, 66.03], &[0.02, 0.03, 0.02]).unwrap();
//! assert!(wm.mswd >= 0.0);
//!
//! // Draw from an empirical density
//! let values = [0.0, 0.5, 1.0, 0.5, 0.0];
//! let curve = DensityCurve::new(&values).unwrap();
//! let draws = RejectionSampler::new().with_seed(1).draw(&curve, 100).unwrap();
//! assert_eq!(draws.len(), 100);
//! ```

pub use geochron_core;
pub use geochron_distributions;
pub use geochron_sampling;
pub use geochron_weighted;

pub use geochron_core::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use geochron_core::{
        interpolate_at_index, linterp1, linterp1s, nanmean, nanmedian, nanpctile, nanstd, Axis,
        Error, Result,
    };
    pub use geochron_distributions::{
        bilinear_exponential, bilinear_exponential_ll, interpolate_ll, BilinearExponential,
        BilinearParams, BilinearTable,
    };
    pub use geochron_sampling::{
        draw_from_distribution, fill_from_distribution, DensityCurve, RejectionSampler,
    };
    pub use geochron_weighted::{
        weighted_mean_mswd_corrected, weighted_mean_uncorrected, UncertaintyCorrection,
        WeightedMean, WeightedMeanEstimator,
    };
}
