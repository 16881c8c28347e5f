//! The bilinear-exponential distribution
//!
//! An asymmetric unimodal density built from two exponential tails joined at
//! the mode by an arctangent sigmoid. With `xs = (x - mode) / width` and
//! `v = 1/2 - atan(xs)/π`:
//!
//! ```text
//! f(x) = scale * exp( sharpness² * skew² * xs * v  -  sharpness² / skew² * xs * (1 - v) )
//! ```
//!
//! `v` tends to 1 left of the mode and to 0 right of it, so the left tail
//! decays at rate `sharpness² * skew²` and the right tail at
//! `sharpness² / skew²`. A skew of 1 gives a symmetric density.
//!
//! `width` and `skew` must be non-zero. This is not checked; a zero yields
//! NaN or infinity.

use std::f64::consts::PI;

/// Parameters of one bilinear-exponential density
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BilinearParams {
    /// Peak height
    pub scale: f64,
    /// Centre of the sigmoid joining the two tails
    pub mode: f64,
    /// Horizontal scale
    pub width: f64,
    /// Overall decay rate of both tails
    pub sharpness: f64,
    /// Ratio of left to right decay (1 is symmetric)
    pub skew: f64,
}

impl BilinearParams {
    /// Create a parameter set
    pub fn new(scale: f64, mode: f64, width: f64, sharpness: f64, skew: f64) -> Self {
        Self {
            scale,
            mode,
            width,
            sharpness,
            skew,
        }
    }

    /// Build from a `[scale, mode, width, sharpness, skew]` array
    pub fn from_array(p: [f64; 5]) -> Self {
        Self::new(p[0], p[1], p[2], p[3], p[4])
    }

    /// As a `[scale, mode, width, sharpness, skew]` array
    pub fn to_array(&self) -> [f64; 5] {
        [self.scale, self.mode, self.width, self.sharpness, self.skew]
    }
}

/// Exponent of the density, shared by the linear and log forms
#[inline]
pub(crate) fn exponent(x: f64, mode: f64, width: f64, sharpness: f64, skew: f64) -> f64 {
    let xs = (x - mode) / width;
    let v = 0.5 - xs.atan() / PI;
    let sharpness2 = sharpness * sharpness;
    let skew2 = skew * skew;
    sharpness2 * skew2 * xs * v - sharpness2 / skew2 * xs * (1.0 - v)
}

/// A bilinear-exponential density with fixed parameters
///
/// # Examples
///
/// ```rust
/// use geochron_distributions::{BilinearExponential, BilinearParams};
///
/// let dist = BilinearExponential::new(BilinearParams::new(1.0, 100.0, 2.0, 1.5, 1.0));
/// assert_eq!(dist.pdf(100.0), 1.0);
/// assert!((dist.pdf(97.0) - dist.pdf(103.0)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BilinearExponential {
    params: BilinearParams,
}

impl BilinearExponential {
    /// Create a density from its parameters
    pub fn new(params: BilinearParams) -> Self {
        Self { params }
    }

    /// The parameters of this density
    pub fn params(&self) -> &BilinearParams {
        &self.params
    }

    #[inline]
    fn exponent(&self, x: f64) -> f64 {
        let p = &self.params;
        exponent(x, p.mode, p.width, p.sharpness, p.skew)
    }

    /// Density at `x`
    #[inline]
    pub fn pdf(&self, x: f64) -> f64 {
        self.params.scale * self.exponent(x).exp()
    }

    /// Natural log of the density at `x`
    #[inline]
    pub fn ln_pdf(&self, x: f64) -> f64 {
        self.params.scale.ln() + self.exponent(x)
    }

    /// Density at each of `xs`
    pub fn pdf_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.pdf(x)).collect()
    }

    /// Log density at each of `xs`
    pub fn ln_pdf_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.ln_pdf(x)).collect()
    }
}

impl From<BilinearParams> for BilinearExponential {
    fn from(params: BilinearParams) -> Self {
        Self::new(params)
    }
}

/// Evaluate the density with parameters `params` at each of `x`
pub fn bilinear_exponential(x: &[f64], params: &BilinearParams) -> Vec<f64> {
    BilinearExponential::new(*params).pdf_many(x)
}
