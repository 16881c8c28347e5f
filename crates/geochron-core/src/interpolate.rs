//! Linear interpolation primitives
//!
//! [`interpolate_at_index`] evaluates a sampled curve at a fractional index
//! and is shared by the rejection sampler and the interpolated
//! log-likelihood. [`linterp1`] and [`linterp1s`] interpolate between
//! explicit `(x, y)` knots.

use crate::{Error, Result};
use ordered_float::OrderedFloat;

/// Linearly interpolate `curve` at the fractional index `i`
///
/// Indices are valid only strictly inside `(1, m - 1)` where `m` is the
/// curve length. The whole first segment `(0, 1]` counts as out of domain,
/// as do the last index, anything beyond either end and NaN; all of these
/// return `out_of_bounds` unchanged. Curves shorter than four samples
/// therefore have at most one usable segment.
///
/// # Examples
///
/// ```rust
/// use geochron_core::interpolate::interpolate_at_index;
///
/// let curve = [0.0, 10.0, 20.0];
/// assert_eq!(interpolate_at_index(&curve, 1.5, -1.0), 15.0);
/// assert_eq!(interpolate_at_index(&curve, 2.0, -1.0), -1.0);
/// ```
#[inline]
pub fn interpolate_at_index(curve: &[f64], i: f64, out_of_bounds: f64) -> f64 {
    let upper = curve.len().saturating_sub(1) as f64;
    if i > 1.0 && i < upper {
        let i_below = i.floor();
        let frac = i - i_below;
        let below = i_below as usize;
        frac * curve[below + 1] + (1.0 - frac) * curve[below]
    } else {
        out_of_bounds
    }
}

/// Interpolate `y(x)` at each of `xq`, with `x` strictly ascending
///
/// Queries outside `[x[0], x[n-1]]` are extrapolated linearly from the end
/// segments. NaN queries yield NaN. NaN knots and knots that are not
/// strictly ascending are rejected; use [`linterp1s`] for unsorted knots.
pub fn linterp1(x: &[f64], y: &[f64], xq: &[f64]) -> Result<Vec<f64>> {
    check_knots(x, y)?;
    if x.iter().any(|v| v.is_nan()) {
        return Err(Error::non_finite("interpolation knots"));
    }
    if let Some(k) = x.windows(2).position(|w| w[0] >= w[1]) {
        return Err(Error::InvalidInput(format!(
            "interpolation knots must be strictly ascending, got {} then {} at index {}",
            x[k],
            x[k + 1],
            k + 1
        )));
    }
    Ok(xq.iter().map(|&q| linterp_sorted(x, y, q)).collect())
}

/// Like [`linterp1`], but `x` may be in any order
///
/// The knots are sorted by `x` (carrying `y` along) before interpolating.
pub fn linterp1s(x: &[f64], y: &[f64], xq: &[f64]) -> Result<Vec<f64>> {
    check_knots(x, y)?;
    if x.iter().any(|v| v.is_nan()) {
        return Err(Error::non_finite("interpolation knots"));
    }

    let mut order: Vec<usize> = (0..x.len()).collect();
    order.sort_by_key(|&k| OrderedFloat(x[k]));
    let xs: Vec<f64> = order.iter().map(|&k| x[k]).collect();
    let ys: Vec<f64> = order.iter().map(|&k| y[k]).collect();

    Ok(xq.iter().map(|&q| linterp_sorted(&xs, &ys, q)).collect())
}

fn check_knots(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "interpolation knots"));
    }
    if x.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: x.len(),
        });
    }
    Ok(())
}

fn linterp_sorted(x: &[f64], y: &[f64], q: f64) -> f64 {
    if q.is_nan() {
        return f64::NAN;
    }
    let n = x.len();
    // Index of the segment [x[k], x[k+1]] used for q, clamped to the end segments
    let k = x.partition_point(|&v| v <= q).clamp(1, n - 1) - 1;
    let (x0, x1) = (x[k], x[k + 1]);
    let (y0, y1) = (y[k], y[k + 1]);
    if x1 == x0 {
        return y0;
    }
    y0 + (y1 - y0) * (q - x0) / (x1 - x0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interpolate_at_index_boundaries() {
        let curve = [0.0, 10.0, 20.0];
        assert_eq!(interpolate_at_index(&curve, 1.0, -1.0), -1.0);
        assert_eq!(interpolate_at_index(&curve, 1.5, -1.0), 15.0);
        assert_eq!(interpolate_at_index(&curve, 2.0, -1.0), -1.0);
    }

    #[test]
    fn test_interpolate_at_index_out_of_range() {
        let curve = [1.0, 2.0, 4.0, 8.0, 16.0];
        assert_eq!(interpolate_at_index(&curve, -3.0, f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(interpolate_at_index(&curve, 0.5, 7.0), 7.0);
        assert_eq!(interpolate_at_index(&curve, 4.0, 7.0), 7.0);
        assert_eq!(interpolate_at_index(&curve, 100.0, 7.0), 7.0);
        assert_eq!(interpolate_at_index(&curve, f64::NAN, 7.0), 7.0);
    }

    #[test]
    fn test_interpolate_at_index_interior() {
        let curve = [1.0, 2.0, 4.0, 8.0, 16.0];
        assert_relative_eq!(interpolate_at_index(&curve, 2.0, 0.0), 4.0);
        assert_relative_eq!(interpolate_at_index(&curve, 2.25, 0.0), 5.0);
        assert_relative_eq!(interpolate_at_index(&curve, 3.5, 0.0), 12.0);
    }

    #[test]
    fn test_interpolate_at_index_short_curves() {
        assert_eq!(interpolate_at_index(&[], 0.5, -1.0), -1.0);
        assert_eq!(interpolate_at_index(&[3.0], 0.5, -1.0), -1.0);
        assert_eq!(interpolate_at_index(&[3.0, 4.0], 0.5, -1.0), -1.0);
    }

    #[test]
    fn test_linterp1_interior_and_extrapolation() {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 10.0, 30.0];
        let out = linterp1(&x, &y, &[0.5, 1.0, 1.5, -1.0, 3.0]).unwrap();
        assert_relative_eq!(out[0], 5.0);
        assert_relative_eq!(out[1], 10.0);
        assert_relative_eq!(out[2], 20.0);
        assert_relative_eq!(out[3], -10.0);
        assert_relative_eq!(out[4], 50.0);
    }

    #[test]
    fn test_linterp1_nan_query() {
        let out = linterp1(&[0.0, 1.0], &[0.0, 1.0], &[f64::NAN]).unwrap();
        assert!(out[0].is_nan());
    }

    #[test]
    fn test_linterp1_rejects_bad_knots() {
        assert!(linterp1(&[0.0, 1.0], &[0.0], &[0.5]).is_err());
        assert!(linterp1(&[0.0], &[0.0], &[0.5]).is_err());
    }

    #[test]
    fn test_linterp1_rejects_unordered_knots() {
        let y = [0.0, 1.0, 2.0];
        assert!(matches!(
            linterp1(&[0.0, 2.0, 1.0], &y, &[0.5]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            linterp1(&[0.0, 1.0, 1.0], &y, &[0.5]),
            Err(Error::InvalidInput(_))
        ));
        assert!(linterp1(&[0.0, f64::NAN, 2.0], &y, &[0.5]).is_err());
        assert!(linterp1(&[f64::NAN, 1.0, 2.0], &y, &[0.5]).is_err());

        // The same knots are accepted once sorted
        let out = linterp1s(&[0.0, 2.0, 1.0], &[0.0, 2.0, 1.0], &[0.5]).unwrap();
        assert_relative_eq!(out[0], 0.5);
    }

    #[test]
    fn test_linterp1s_sorts_knots() {
        let x = [2.0, 0.0, 1.0];
        let y = [30.0, 0.0, 10.0];
        let out = linterp1s(&x, &y, &[0.5, 1.5]).unwrap();
        assert_relative_eq!(out[0], 5.0);
        assert_relative_eq!(out[1], 20.0);
    }

    #[test]
    fn test_linterp1s_rejects_nan_knots() {
        assert!(linterp1s(&[0.0, f64::NAN], &[0.0, 1.0], &[0.5]).is_err());
    }
}
