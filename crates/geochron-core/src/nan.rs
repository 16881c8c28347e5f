//! NaN-aware reductions
//!
//! Every reduction skips NaN entries. An input with no non-NaN values
//! (including an empty one) reduces to NaN rather than erroring.
//!
//! The `_axis` variants reduce an [`nalgebra::DMatrix`] along one direction,
//! see [`Axis`].

use nalgebra::DMatrix;
use ordered_float::OrderedFloat;

/// Direction of a matrix reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Reduce down the rows, producing one value per column
    #[default]
    Rows,
    /// Reduce across the columns, producing one value per row
    Columns,
}

impl Axis {
    /// Get the name of this axis
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rows => "rows",
            Self::Columns => "columns",
        }
    }
}

/// Non-NaN values of `data`, sorted ascending
///
/// # Examples
///
/// ```rust
/// use geochron_core::nan::sorted_non_nan;
///
/// assert_eq!(sorted_non_nan(&[3.0, f64::NAN, 1.0]), vec![1.0, 3.0]);
/// ```
pub fn sorted_non_nan(data: &[f64]) -> Vec<f64> {
    let mut values: Vec<f64> = data.iter().copied().filter(|x| !x.is_nan()).collect();
    values.sort_by_key(|&x| OrderedFloat(x));
    values
}

/// Number of non-NaN values
pub fn count_non_nan(data: &[f64]) -> usize {
    data.iter().filter(|x| !x.is_nan()).count()
}

/// Mean of the non-NaN values
pub fn nanmean(data: &[f64]) -> f64 {
    let (sum, n) = data
        .iter()
        .filter(|x| !x.is_nan())
        .fold((0.0, 0usize), |(s, n), &x| (s + x, n + 1));
    if n == 0 {
        return f64::NAN;
    }
    sum / n as f64
}

/// Sample standard deviation (n - 1 denominator) of the non-NaN values
///
/// Fewer than two non-NaN values give NaN.
pub fn nanstd(data: &[f64]) -> f64 {
    let n = count_non_nan(data);
    if n < 2 {
        return f64::NAN;
    }
    let m = nanmean(data);
    let ss: f64 = data
        .iter()
        .filter(|x| !x.is_nan())
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Median of the non-NaN values
pub fn nanmedian(data: &[f64]) -> f64 {
    percentile_of_sorted(&sorted_non_nan(data), 50.0)
}

/// Percentile `p` (in percent, `0..=100`) of the non-NaN values
///
/// Interpolates linearly between the closest ranks. A `p` outside
/// `[0, 100]` is clamped.
pub fn nanpctile(data: &[f64], p: f64) -> f64 {
    percentile_of_sorted(&sorted_non_nan(data), p)
}

/// Minimum of the non-NaN values
pub fn nanminimum(data: &[f64]) -> f64 {
    data.iter()
        .copied()
        .filter(|x| !x.is_nan())
        .min_by_key(|&x| OrderedFloat(x))
        .unwrap_or(f64::NAN)
}

/// Maximum of the non-NaN values
pub fn nanmaximum(data: &[f64]) -> f64 {
    data.iter()
        .copied()
        .filter(|x| !x.is_nan())
        .max_by_key(|&x| OrderedFloat(x))
        .unwrap_or(f64::NAN)
}

/// Range (maximum minus minimum) of the non-NaN values
pub fn nanrange(data: &[f64]) -> f64 {
    nanmaximum(data) - nanminimum(data)
}

fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() || p.is_nan() {
        return f64::NAN;
    }
    let n = sorted.len();
    let rank = (p.clamp(0.0, 100.0) / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;
    let (below, above) = (sorted[lower], sorted[upper]);
    if below == above {
        return below;
    }
    (below + (above - below) * fraction).clamp(below, above)
}

/// Apply a slice reduction to each row or column of `m`
pub fn reduce_axis<F>(m: &DMatrix<f64>, axis: Axis, reduce: F) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    match axis {
        Axis::Rows => (0..m.ncols())
            .map(|j| {
                let column: Vec<f64> = m.column(j).iter().copied().collect();
                reduce(&column)
            })
            .collect(),
        Axis::Columns => (0..m.nrows())
            .map(|i| {
                let row: Vec<f64> = m.row(i).iter().copied().collect();
                reduce(&row)
            })
            .collect(),
    }
}

/// [`nanmean`] along `axis`
pub fn nanmean_axis(m: &DMatrix<f64>, axis: Axis) -> Vec<f64> {
    reduce_axis(m, axis, nanmean)
}

/// [`nanstd`] along `axis`
pub fn nanstd_axis(m: &DMatrix<f64>, axis: Axis) -> Vec<f64> {
    reduce_axis(m, axis, nanstd)
}

/// [`nanmedian`] along `axis`
pub fn nanmedian_axis(m: &DMatrix<f64>, axis: Axis) -> Vec<f64> {
    reduce_axis(m, axis, nanmedian)
}

/// [`nanpctile`] along `axis`
pub fn nanpctile_axis(m: &DMatrix<f64>, p: f64, axis: Axis) -> Vec<f64> {
    reduce_axis(m, axis, |v| nanpctile(v, p))
}

/// [`nanminimum`] along `axis`
pub fn nanminimum_axis(m: &DMatrix<f64>, axis: Axis) -> Vec<f64> {
    reduce_axis(m, axis, nanminimum)
}

/// [`nanmaximum`] along `axis`
pub fn nanmaximum_axis(m: &DMatrix<f64>, axis: Axis) -> Vec<f64> {
    reduce_axis(m, axis, nanmaximum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const NAN: f64 = f64::NAN;

    #[test]
    fn test_nanmean_skips_nan() {
        assert_eq!(nanmean(&[1.0, NAN, 3.0]), 2.0);
        assert!(nanmean(&[NAN, NAN]).is_nan());
        assert!(nanmean(&[]).is_nan());
    }

    #[test]
    fn test_nanstd() {
        let data = [1.0, 2.0, NAN, 3.0, 4.0, 5.0];
        // Variance = 10 / 4 = 2.5
        assert_relative_eq!(nanstd(&data), 2.5f64.sqrt(), epsilon = 1e-12);
        assert!(nanstd(&[42.0, NAN]).is_nan());
        assert_eq!(nanstd(&[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_nanmedian() {
        assert_eq!(nanmedian(&[3.0, NAN, 1.0, 2.0]), 2.0);
        assert_eq!(nanmedian(&[4.0, 1.0, NAN, 3.0, 2.0]), 2.5);
        assert!(nanmedian(&[NAN]).is_nan());
    }

    #[test]
    fn test_nanpctile() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, NAN];
        assert_eq!(nanpctile(&data, 0.0), 1.0);
        assert_eq!(nanpctile(&data, 100.0), 5.0);
        assert_eq!(nanpctile(&data, 25.0), 2.0);
        assert_relative_eq!(nanpctile(&data, 10.0), 1.4, epsilon = 1e-12);
        assert_eq!(nanpctile(&data, 150.0), 5.0);
        assert!(nanpctile(&data, NAN).is_nan());
    }

    #[test]
    fn test_nanpctile_constant_data() {
        for &x in &[0.1, 0.84, -3.7, 1e-300, 12345.678] {
            let data = [x, NAN, x, x];
            for &p in &[10.0, 33.0, 47.3, 71.1, 99.9] {
                let v = nanpctile(&data, p);
                assert_eq!(v, x, "x = {x}, p = {p}");
                assert!(nanminimum(&data) <= v && v <= nanmaximum(&data));
            }
        }

        let m = DMatrix::from_element(3, 2, 0.1);
        assert_eq!(nanpctile_axis(&m, 10.0, Axis::Rows), vec![0.1, 0.1]);
        assert_eq!(nanpctile_axis(&m, 47.3, Axis::Columns), vec![0.1, 0.1, 0.1]);
    }

    #[test]
    fn test_nanminimum_nanmaximum_nanrange() {
        let data = [NAN, -2.0, 7.0, 3.0, f64::INFINITY];
        assert_eq!(nanminimum(&data), -2.0);
        assert_eq!(nanmaximum(&data), f64::INFINITY);
        assert_eq!(nanrange(&[NAN, -2.0, 7.0]), 9.0);
        assert!(nanminimum(&[NAN]).is_nan());
        assert!(nanrange(&[]).is_nan());
    }

    #[test]
    fn test_count_and_sorted() {
        assert_eq!(count_non_nan(&[NAN, 1.0, NAN, 2.0]), 2);
        assert_eq!(sorted_non_nan(&[3.0, NAN, -1.0, 2.0]), vec![-1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_axis_reductions() {
        // 2 x 3
        // [1, NAN, 5]
        // [3, 4,   NAN]
        let m = DMatrix::from_row_slice(2, 3, &[1.0, NAN, 5.0, 3.0, 4.0, NAN]);

        let by_column = nanmean_axis(&m, Axis::Rows);
        assert_eq!(by_column, vec![2.0, 4.0, 5.0]);

        let by_row = nanmean_axis(&m, Axis::Columns);
        assert_eq!(by_row, vec![3.0, 3.5]);

        assert_eq!(nanminimum_axis(&m, Axis::Columns), vec![1.0, 3.0]);
        assert_eq!(nanmaximum_axis(&m, Axis::Rows), vec![3.0, 4.0, 5.0]);
        assert_eq!(nanmedian_axis(&m, Axis::Rows), vec![2.0, 4.0, 5.0]);
        assert_eq!(nanpctile_axis(&m, 100.0, Axis::Columns), vec![5.0, 4.0]);

        let stds = nanstd_axis(&m, Axis::Rows);
        assert_relative_eq!(stds[0], 2.0f64.sqrt(), epsilon = 1e-12);
        assert!(stds[1].is_nan());
    }

    #[test]
    fn test_axis_names() {
        assert_eq!(Axis::Rows.name(), "rows");
        assert_eq!(Axis::Columns.name(), "columns");
        assert_eq!(Axis::default(), Axis::Rows);
    }
}
