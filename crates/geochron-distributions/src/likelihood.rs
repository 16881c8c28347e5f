//! Log-likelihood by interpolation into tabulated per-sample curves
//!
//! Column `i` of the table holds sample `i`'s log-density tabulated at
//! integer indices; `x[i]` is a fractional index into that column. Queries
//! outside the open interval `(1, m - 1)` report `-inf`, the log of zero
//! probability. This includes the first segment `(0, 1]`, so a column's
//! first two entries never contribute on their own.

use geochron_core::{interpolate_at_index, Error, Result};
use nalgebra::DMatrix;
use tracing::debug;

/// Interpolated log-likelihood of each sample
///
/// Sample `i` is scored with [`interpolate_at_index`] on column `i`, so
/// `x[i]` in `(0, 1]` or at `m - 1` and beyond yields `-inf`.
///
/// # Examples
///
/// ```rust
/// use geochron_distributions::interpolate_ll;
/// use nalgebra::DMatrix;
///
/// // One sample, tabulated at four indices
/// let p = DMatrix::from_column_slice(4, 1, &[-9.0, -1.0, -3.0, -9.0]);
/// assert_eq!(interpolate_ll(&[1.5], &p).unwrap(), vec![-2.0]);
/// assert_eq!(interpolate_ll(&[7.0], &p).unwrap(), vec![f64::NEG_INFINITY]);
/// ```
pub fn interpolate_ll(x: &[f64], p: &DMatrix<f64>) -> Result<Vec<f64>> {
    if x.len() != p.ncols() {
        return Err(Error::size_mismatch(p.ncols(), x.len(), "log-likelihood table columns"));
    }

    // Column-major storage: column i is rows [i * m, (i + 1) * m)
    let m = p.nrows();
    let data = p.as_slice();
    let ll: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| interpolate_at_index(&data[i * m..(i + 1) * m], xi, f64::NEG_INFINITY))
        .collect();

    debug!(
        samples = ll.len(),
        out_of_domain = ll.iter().filter(|v| **v == f64::NEG_INFINITY).count(),
        "interpolated log-likelihood"
    );
    Ok(ll)
}

/// Sum of [`interpolate_ll`] over all samples
///
/// Any out-of-domain sample makes the total `-inf`.
pub fn interpolate_ll_total(x: &[f64], p: &DMatrix<f64>) -> Result<f64> {
    Ok(interpolate_ll(x, p)?.iter().sum())
}
