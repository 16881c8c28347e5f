//! Result type for weighted-mean estimation

use std::fmt;

/// An inverse-variance weighted mean with its uncertainty and MSWD
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedMean {
    /// The weighted mean
    pub mean: f64,
    /// One-sigma uncertainty of the mean
    pub sigma: f64,
    /// Mean square of weighted deviates (0 for a single point)
    pub mswd: f64,
}

impl WeightedMean {
    /// Create a new weighted mean result
    pub fn new(mean: f64, sigma: f64, mswd: f64) -> Self {
        Self { mean, sigma, mswd }
    }

    /// Convert into a `(mean, sigma, mswd)` tuple
    pub fn into_tuple(self) -> (f64, f64, f64) {
        (self.mean, self.sigma, self.mswd)
    }
}

impl From<WeightedMean> for (f64, f64, f64) {
    fn from(wm: WeightedMean) -> Self {
        wm.into_tuple()
    }
}

impl fmt::Display for WeightedMean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6} ± {:.6} (1σ, MSWD = {:.4})",
            self.mean, self.sigma, self.mswd
        )
    }
}
