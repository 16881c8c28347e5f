//! Nearest-index lookup helpers
//!
//! Linear scans over unsorted sources; NaN entries in the source are never
//! selected.

/// Index of the element of `source` closest to each target
///
/// Ties resolve to the lowest index. Returns `None` for a target when
/// `source` has no non-NaN element or the target itself is NaN.
///
/// # Examples
///
/// ```rust
/// use geochron_core::search::find_closest;
///
/// let source = [0.0, 10.0, 20.0];
/// assert_eq!(find_closest(&source, &[12.0, -5.0]), vec![Some(1), Some(0)]);
/// ```
pub fn find_closest(source: &[f64], targets: &[f64]) -> Vec<Option<usize>> {
    targets
        .iter()
        .map(|&t| best_index(source, |v| (v - t).abs()))
        .collect()
}

/// Index of the closest element of `source` at or below each target
pub fn find_closest_below(source: &[f64], targets: &[f64]) -> Vec<Option<usize>> {
    targets
        .iter()
        .map(|&t| best_index(source, |v| if v <= t { t - v } else { f64::NAN }))
        .collect()
}

/// Index of the closest element of `source` at or above each target
pub fn find_closest_above(source: &[f64], targets: &[f64]) -> Vec<Option<usize>> {
    targets
        .iter()
        .map(|&t| best_index(source, |v| if v >= t { v - t } else { f64::NAN }))
        .collect()
}

/// Index minimizing `distance`; NaN distances are skipped
fn best_index<F: Fn(f64) -> f64>(source: &[f64], distance: F) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &v) in source.iter().enumerate() {
        let d = distance(v);
        if d.is_nan() {
            continue;
        }
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((idx, d)),
        }
    }
    best.map(|(idx, _)| idx)
}
