//! Inverse-variance weighted means
//!
//! Both variants share the same mean and MSWD; they differ only in the
//! reported uncertainty:
//!
//! - [`weighted_mean_mswd_corrected`]: `sqrt(mswd / Σ 1/σ²)`, scaling the
//!   naive standard error by the observed excess (or deficit) of scatter
//! - [`weighted_mean_uncorrected`]: `sqrt(1 / Σ 1/σ²)`
//!
//! Every sigma must be strictly positive. This is not checked: a zero sigma
//! propagates as infinity or NaN in the result.

use crate::WeightedMean;
use geochron_core::{Error, Result};
use tracing::debug;

/// How the uncertainty of a weighted mean is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UncertaintyCorrection {
    /// Scale the standard error by `sqrt(mswd)`
    #[default]
    Mswd,
    /// Naive inverse-variance standard error, ignoring excess scatter
    None,
}

impl UncertaintyCorrection {
    /// Get the name of this correction
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mswd => "mswd",
            Self::None => "none",
        }
    }
}

/// Weighted mean estimator with a configurable uncertainty correction
///
/// # Examples
///
/// ```rust
/// use geochron_weighted::{UncertaintyCorrection, WeightedMeanEstimator};
///
/// let ages = [100.1, 99.8, 100.3];
/// let sigmas = [0.2, 0.3, 0.2];
///
/// let estimator = WeightedMeanEstimator::new().with_correction(UncertaintyCorrection::None);
/// let wm = estimator.estimate(&ages, &sigmas).unwrap();
/// assert!((wm.mean - 100.13).abs() < 0.05);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedMeanEstimator {
    correction: UncertaintyCorrection,
}

impl WeightedMeanEstimator {
    /// Create a new estimator using the MSWD correction
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the uncertainty correction
    pub fn with_correction(mut self, correction: UncertaintyCorrection) -> Self {
        self.correction = correction;
        self
    }

    /// The configured correction
    pub fn correction(&self) -> UncertaintyCorrection {
        self.correction
    }

    /// Compute the weighted mean of `values` with one-sigma `sigmas`
    pub fn estimate(&self, values: &[f64], sigmas: &[f64]) -> Result<WeightedMean> {
        if values.is_empty() {
            return Err(Error::empty_input("weighted mean"));
        }
        if values.len() != sigmas.len() {
            return Err(Error::size_mismatch(values.len(), sigmas.len(), "sigmas"));
        }

        // mswd is undefined for a single point; report it as zero
        if values.len() == 1 {
            return Ok(WeightedMean::new(values[0], sigmas[0], 0.0));
        }

        let (s1, s2) = values
            .iter()
            .zip(sigmas)
            .fold((0.0f64, 0.0f64), |(s1, s2), (&v, &s)| {
                let w = 1.0 / (s * s);
                (s1 + v * w, s2 + w)
            });
        let mean = s1 / s2;

        let s3: f64 = values
            .iter()
            .zip(sigmas)
            .map(|(&v, &s)| {
                let d = v - mean;
                d * d / (s * s)
            })
            .sum();
        let mswd = s3 / (values.len() - 1) as f64;

        let sigma = match self.correction {
            UncertaintyCorrection::Mswd => (mswd / s2).sqrt(),
            UncertaintyCorrection::None => (1.0 / s2).sqrt(),
        };

        debug!(
            n = values.len(),
            correction = self.correction.name(),
            mean,
            sigma,
            mswd,
            "weighted mean"
        );

        Ok(WeightedMean::new(mean, sigma, mswd))
    }
}

/// Weighted mean with MSWD-corrected uncertainty
///
/// # Examples
///
/// ```rust
/// use geochron_weighted::weighted_mean_mswd_corrected;
///
/// let wm = weighted_mean_mswd_corrected(&[5.0], &[0.2]).unwrap();
/// assert_eq!(wm.into_tuple(), (5.0, 0.2, 0.0));
/// ```
pub fn weighted_mean_mswd_corrected(values: &[f64], sigmas: &[f64]) -> Result<WeightedMean> {
    WeightedMeanEstimator::new()
        .with_correction(UncertaintyCorrection::Mswd)
        .estimate(values, sigmas)
}

/// Weighted mean with the naive inverse-variance uncertainty
pub fn weighted_mean_uncorrected(values: &[f64], sigmas: &[f64]) -> Result<WeightedMean> {
    WeightedMeanEstimator::new()
        .with_correction(UncertaintyCorrection::None)
        .estimate(values, sigmas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_point() {
        let wm = weighted_mean_mswd_corrected(&[5.0], &[0.2]).unwrap();
        assert_eq!(wm.into_tuple(), (5.0, 0.2, 0.0));

        let wm = weighted_mean_uncorrected(&[5.0], &[0.2]).unwrap();
        assert_eq!(wm.into_tuple(), (5.0, 0.2, 0.0));
    }

    #[test]
    fn test_known_values() {
        // Weights 1, 1/4: mean = (1*1 + 3/4) / (5/4) = 1.4
        let values = [1.0, 3.0];
        let sigmas = [1.0, 2.0];
        let wm = weighted_mean_uncorrected(&values, &sigmas).unwrap();
        assert_relative_eq!(wm.mean, 1.4, epsilon = 1e-12);
        assert_relative_eq!(wm.sigma, (1.0f64 / 1.25).sqrt(), epsilon = 1e-12);
        // s3 = 0.16 + 2.56 / 4 = 0.8, n - 1 = 1
        assert_relative_eq!(wm.mswd, 0.8, epsilon = 1e-12);

        let corrected = weighted_mean_mswd_corrected(&values, &sigmas).unwrap();
        assert_relative_eq!(corrected.mean, wm.mean);
        assert_relative_eq!(corrected.mswd, wm.mswd);
        assert_relative_eq!(corrected.sigma, (0.8f64 / 1.25).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_variants_coincide_when_mswd_is_one() {
        // Equal sigmas of 1, deviations of ±1 about the mean: s3 = 2, n - 1 = 2
        let values = [9.0, 10.0, 11.0];
        let sigmas = [1.0, 1.0, 1.0];
        let a = weighted_mean_mswd_corrected(&values, &sigmas).unwrap();
        let b = weighted_mean_uncorrected(&values, &sigmas).unwrap();
        assert_eq!(a.mswd, 1.0);
        assert_eq!(a.sigma, b.sigma);
    }

    #[test]
    fn test_zero_sigma_propagates_non_finite() {
        let wm = weighted_mean_mswd_corrected(&[1.0, 2.0], &[0.0, 1.0]).unwrap();
        assert!(!wm.mean.is_finite() || !wm.sigma.is_finite() || !wm.mswd.is_finite());
    }

    #[test]
    fn test_structural_errors() {
        assert!(matches!(
            weighted_mean_mswd_corrected(&[], &[]),
            Err(Error::InsufficientData { expected: 1, actual: 0 })
        ));
        assert!(matches!(
            weighted_mean_uncorrected(&[1.0, 2.0], &[1.0]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_estimator_defaults() {
        let estimator = WeightedMeanEstimator::new();
        assert_eq!(estimator.correction(), UncertaintyCorrection::Mswd);
        assert_eq!(UncertaintyCorrection::None.name(), "none");
    }
}
