//! Discretized density curves

use geochron_core::{Error, Result};

/// A non-negative density tabulated at integer indices `0..m`
///
/// The curve is piecewise linear between samples and need not be
/// normalized. It borrows the caller's data for the duration of sampling.
#[derive(Debug, Clone, Copy)]
pub struct DensityCurve<'a> {
    values: &'a [f64],
    max: f64,
}

impl<'a> DensityCurve<'a> {
    /// Wrap `values` as a density curve
    ///
    /// Requires at least two samples, all finite and non-negative. An
    /// all-zero curve is accepted; see [`DensityCurve::is_degenerate`].
    pub fn new(values: &'a [f64]) -> Result<Self> {
        if values.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: values.len(),
            });
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("density curve"));
        }
        if let Some(idx) = values.iter().position(|&v| v < 0.0) {
            return Err(Error::InvalidInput(format!(
                "density curve has negative value {} at index {idx}",
                values[idx]
            )));
        }

        let max = values.iter().copied().fold(0.0, f64::max);
        Ok(Self { values, max })
    }

    /// The tabulated samples
    pub fn values(&self) -> &'a [f64] {
        self.values
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; a curve holds at least two samples
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Largest density value, the rejection envelope
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Last valid index, `m - 1`
    pub fn x_max(&self) -> f64 {
        (self.values.len() - 1) as f64
    }

    /// True if the curve has no positive density anywhere
    ///
    /// Rejection sampling never accepts a draw from such a curve, so an
    /// unbounded sampler would loop forever on it.
    pub fn is_degenerate(&self) -> bool {
        self.max <= 0.0
    }

    /// Piecewise-linear density at a fractional index in `[0, m - 1]`
    #[inline]
    pub fn value_at(&self, x: f64) -> f64 {
        let f = (x.floor().max(0.0) as usize).min(self.values.len() - 2);
        let frac = x - f as f64;
        self.values[f + 1] * frac + self.values[f] * (1.0 - frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_curve_validation() {
        assert!(matches!(
            DensityCurve::new(&[1.0]),
            Err(Error::InsufficientData { expected: 2, actual: 1 })
        ));
        assert!(DensityCurve::new(&[1.0, f64::NAN]).is_err());
        assert!(DensityCurve::new(&[1.0, f64::INFINITY]).is_err());
        assert!(DensityCurve::new(&[1.0, -0.5, 2.0]).is_err());
        assert!(DensityCurve::new(&[0.0, 0.0]).is_ok());
    }

    #[test]
    fn test_curve_accessors() {
        let values = [0.0, 1.0, 3.0, 0.5];
        let curve = DensityCurve::new(&values).unwrap();
        assert_eq!(curve.len(), 4);
        assert_eq!(curve.max(), 3.0);
        assert_eq!(curve.x_max(), 3.0);
        assert!(!curve.is_degenerate());
        assert!(!curve.is_empty());
        assert_eq!(curve.values(), &values);

        assert!(DensityCurve::new(&[0.0, 0.0, 0.0]).unwrap().is_degenerate());
    }

    #[test]
    fn test_value_at() {
        let curve = DensityCurve::new(&[0.0, 1.0, 3.0]).unwrap();
        assert_relative_eq!(curve.value_at(0.0), 0.0);
        assert_relative_eq!(curve.value_at(0.5), 0.5);
        assert_relative_eq!(curve.value_at(1.0), 1.0);
        assert_relative_eq!(curve.value_at(1.25), 1.5);
        // The last index is served by the final segment
        assert_relative_eq!(curve.value_at(2.0), 3.0);
    }
}
