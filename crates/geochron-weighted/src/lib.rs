//! Inverse-variance weighted means with MSWD goodness-of-fit
//!
//! Given paired values and one-sigma uncertainties, this crate computes the
//! weighted mean, its uncertainty and the MSWD (mean square of weighted
//! deviates, the reduced chi-square of the weighted fit). An MSWD near 1
//! means the observed scatter matches the stated uncertainties.
//!
//! # Overview
//!
//! | Function | Reported sigma |
//! |----------|----------------|
//! | [`weighted_mean_mswd_corrected`] | `sqrt(mswd / Σ 1/σ²)` |
//! | [`weighted_mean_uncorrected`] | `sqrt(1 / Σ 1/σ²)` |
//!
//! A single data point is returned unchanged with an MSWD of 0.
//!
//! # Examples
//!
//! ```rust
//! use geochron_weighted::{weighted_mean_mswd_corrected, weighted_mean_uncorrected};
//!
//! let ages = [251.90, 251.94, 251.88, 251.95];
//! let sigmas = [0.03, 0.04, 0.03, 0.05];
//!
//! let corrected = weighted_mean_mswd_corrected(&ages, &sigmas).unwrap();
//! let naive = weighted_mean_uncorrected(&ages, &sigmas).unwrap();
//!
//! assert_eq!(corrected.mean, naive.mean);
//! println!("{corrected}");
//! ```

mod types;
mod weighted;

pub use types::WeightedMean;
pub use weighted::{
    weighted_mean_mswd_corrected, weighted_mean_uncorrected, UncertaintyCorrection,
    WeightedMeanEstimator,
};
