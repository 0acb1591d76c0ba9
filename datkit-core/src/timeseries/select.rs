use crate::timeseries::util::leftmost_insertion;
use crate::{Bounds, DatkitError};

/// Returns the index pair `(i, j)` of samples inside the interval `t0 .. t1`.
///
/// `i` is the first index with `times[i] >= t0` and `j` the first index with
/// `times[j] >= t1`, so with the default [`Bounds::HALF_OPEN`] the slice
/// `times[i..j]` covers `[t0, t1)`. `include_left = false` skips a sample
/// lying exactly at `t0`; `include_right = true` takes in a sample lying
/// exactly at `t1`. Comparisons are exact (no tolerance).
///
/// Intervals reaching past the data are clamped to `[0, n]`; an interval
/// entirely outside the data yields the empty pair `(0, 0)` or `(n, n)`.
///
/// ```
/// use datkit_core::{Bounds, select};
///
/// let times: Vec<f64> = (0..10).map(f64::from).collect();
/// assert_eq!(select(&times, 2.0, 4.0, Bounds::HALF_OPEN).unwrap(), (2, 4));
/// assert_eq!(select(&times, 3.0, 8.0, Bounds::CLOSED).unwrap(), (3, 9));
/// assert_eq!(select(&times, 12.0, 18.0, Bounds::OPEN).unwrap(), (10, 10));
/// ```
///
/// # Errors
/// - `EmptySeries` if `times` is empty.
/// - `InvalidInterval` unless `t1 > t0` (this includes `t0 == t1` and NaN).
pub fn select(
    times: &[f64],
    t0: f64,
    t1: f64,
    bounds: Bounds,
) -> Result<(usize, usize), DatkitError> {
    if times.is_empty() {
        return Err(DatkitError::EmptySeries);
    }
    if t0.is_nan() || t1.is_nan() || t1 <= t0 {
        return Err(DatkitError::InvalidInterval { t0, t1 });
    }
    let i = start_index(times, t0, bounds.include_left);
    let j = end_index(times, t1, bounds.include_right);

    #[cfg(feature = "tracing")]
    tracing::trace!(t0, t1, i, j, "selected interval");
    Ok((i, j))
}

/// Like [`select`], with either end optional.
///
/// A missing `t0` selects from index `0` and a missing `t1` up to `n`,
/// whatever the bound flags say; with both missing the full range `(0, n)`
/// is returned.
///
/// # Errors
/// - `EmptySeries` if `times` is empty.
/// - `InvalidInterval` if both ends are given and `t1 <= t0`, or if a given
///   end is NaN.
pub fn select_span(
    times: &[f64],
    t0: Option<f64>,
    t1: Option<f64>,
    bounds: Bounds,
) -> Result<(usize, usize), DatkitError> {
    if times.is_empty() {
        return Err(DatkitError::EmptySeries);
    }
    match (t0, t1) {
        (Some(t0), Some(t1)) => select(times, t0, t1, bounds),
        (Some(t0), None) if t0.is_nan() => Err(DatkitError::InvalidInterval {
            t0,
            t1: f64::INFINITY,
        }),
        (None, Some(t1)) if t1.is_nan() => Err(DatkitError::InvalidInterval {
            t0: f64::NEG_INFINITY,
            t1,
        }),
        (Some(t0), None) => Ok((start_index(times, t0, bounds.include_left), times.len())),
        (None, Some(t1)) => Ok((0, end_index(times, t1, bounds.include_right))),
        (None, None) => Ok((0, times.len())),
    }
}

#[allow(clippy::float_cmp)]
fn start_index(times: &[f64], t0: f64, include_left: bool) -> usize {
    let i = leftmost_insertion(times, t0);
    if !include_left && times.get(i) == Some(&t0) {
        i + 1
    } else {
        i
    }
}

#[allow(clippy::float_cmp)]
fn end_index(times: &[f64], t1: f64, include_right: bool) -> usize {
    let j = leftmost_insertion(times, t1);
    if include_right && times.get(j) == Some(&t1) {
        j + 1
    } else {
        j
    }
}
