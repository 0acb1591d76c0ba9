use crate::timeseries::check::sampling_interval;
use crate::timeseries::util::{ensure_non_empty, leftmost_insertion};
use crate::{DatkitError, check_tolerance};

/// Index of the time closest to `t` in a non-empty, increasing `times`.
///
/// The right neighbour only wins when it is strictly closer, so exact
/// midpoints resolve to the left.
fn nearest_index(times: &[f64], t: f64) -> usize {
    let p = leftmost_insertion(times, t);
    if p == 0 {
        return 0;
    }
    if p == times.len() {
        return p - 1;
    }
    if times[p] - t < t - times[p - 1] {
        p
    } else {
        p - 1
    }
}

/// Tolerant nearest match shared by [`locate`] and [`locate_range`].
fn nearest_within(times: &[f64], t: f64, ttol: f64) -> Result<usize, DatkitError> {
    let (first, last) = ensure_non_empty(times)?;
    if t.is_nan() {
        return Err(DatkitError::not_found(t, first, 0));
    }
    if first - t > ttol || t - last > ttol {
        #[cfg(feature = "tracing")]
        tracing::debug!(t, first, last, ttol, "query time outside series range");
        return Err(DatkitError::out_of_range(t, first, last));
    }

    let i = nearest_index(times, t);
    if (times[i] - t).abs() > ttol {
        #[cfg(feature = "tracing")]
        tracing::debug!(t, nearest = times[i], index = i, ttol, "no sample within tolerance");
        return Err(DatkitError::not_found(t, times[i], i));
    }
    Ok(i)
}

/// Returns the index of time `t` in `times`.
///
/// Times are regarded as equal when they differ by at most `ttol`. A query
/// that lies just outside the data, but within `ttol` of the first or last
/// time, resolves to `0` or `times.len() - 1`.
///
/// ```
/// use datkit_core::{DEFAULT_TTOL, DatkitError, locate};
///
/// let times: Vec<f64> = (0..10).map(f64::from).collect();
/// assert_eq!(locate(&times, 4.0, DEFAULT_TTOL).unwrap(), 4);
/// assert!(matches!(
///     locate(&times, 4.5, DEFAULT_TTOL),
///     Err(DatkitError::NotFound { .. })
/// ));
/// ```
///
/// # Errors
/// - `EmptySeries` if `times` is empty.
/// - `InvalidArg` if `ttol` is negative or not finite.
/// - `OutOfRange` if `t` is farther than `ttol` beyond either end of the data.
/// - `NotFound` if no time lies within `ttol` of `t` (or `t` is NaN).
pub fn locate(times: &[f64], t: f64, ttol: f64) -> Result<usize, DatkitError> {
    check_tolerance("ttol", ttol)?;
    nearest_within(times, t, ttol)
}

/// Returns the half-open index range `(lo, hi)` covering `[t - lpad, t + rpad)`.
///
/// `lo` is the index of `t - lpad` and `hi` the index of `t + rpad`, both
/// located with the same tolerant match as [`locate`]. Slicing
/// `values[lo..hi]` therefore excludes the sample at `t + rpad`. An unset pad
/// counts as zero, so with both pads unset the result is the zero-width range
/// `(i, i)` at the index of `t`.
///
/// # Errors
/// - `InvalidPadding` if either pad is negative or NaN.
/// - Any error of [`locate`] for the padded times.
pub fn locate_range(
    times: &[f64],
    t: f64,
    lpad: Option<f64>,
    rpad: Option<f64>,
    ttol: f64,
) -> Result<(usize, usize), DatkitError> {
    check_tolerance("ttol", ttol)?;
    let is_bad = |pad: Option<f64>| pad.is_some_and(|p| p.is_nan() || p < 0.0);
    if is_bad(lpad) || is_bad(rpad) {
        return Err(DatkitError::InvalidPadding { lpad, rpad });
    }

    let t0 = lpad.map_or(t, |p| t - p);
    let t1 = rpad.map_or(t, |p| t + p);
    let lo = nearest_within(times, t0, ttol)?;
    let hi = nearest_within(times, t1, ttol)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(t, t0, t1, lo, hi, "located padded range");
    Ok((lo, hi))
}

/// Returns the index of the time nearest to `t`.
///
/// Any `t` inside `[times[0], times[n-1]]` succeeds. Outside the data the
/// query may overshoot by at most half the sampling interval. A
/// single-sample series only matches its own time.
///
/// # Errors
/// - `EmptySeries` if `times` is empty.
/// - `OutOfRange` if `t` overshoots either end by more than half a step.
/// - `NotFound` if `t` is NaN.
pub fn locate_nearest(times: &[f64], t: f64) -> Result<usize, DatkitError> {
    let (first, last) = ensure_non_empty(times)?;
    if t.is_nan() {
        return Err(DatkitError::not_found(t, first, 0));
    }
    if t < first || t > last {
        let half_step = sampling_interval(times).map_or(0.0, |dt| 0.5 * dt);
        if first - t > half_step || t - last > half_step {
            #[cfg(feature = "tracing")]
            tracing::debug!(t, first, last, half_step, "nearest lookup overshoots series");
            return Err(DatkitError::out_of_range(t, first, last));
        }
    }
    Ok(nearest_index(times, t))
}
