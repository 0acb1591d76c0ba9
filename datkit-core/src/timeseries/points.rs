//! Values at, near, and aggregated over points in time.

use crate::timeseries::locate::{locate, locate_nearest, locate_range};
use crate::timeseries::select::select;
use crate::timeseries::util::ensure_same_length;
use crate::{Bounds, DatkitError};

/// Returns the value at time `t`, which must be present within `ttol`.
///
/// # Errors
/// `LengthMismatch`, or any error of [`locate`].
pub fn value_at(times: &[f64], values: &[f64], t: f64, ttol: f64) -> Result<f64, DatkitError> {
    ensure_same_length(times, values)?;
    Ok(values[locate(times, t, ttol)?])
}

/// Returns the value at the time nearest to `t`.
///
/// # Errors
/// `LengthMismatch`, or any error of [`locate_nearest`].
pub fn value_near(times: &[f64], values: &[f64], t: f64) -> Result<f64, DatkitError> {
    ensure_same_length(times, values)?;
    Ok(values[locate_nearest(times, t)?])
}

/// Returns the mean of the values on the interval `t0 .. t1`.
///
/// ```
/// use datkit_core::{Bounds, mean_on};
///
/// let t: Vec<f64> = (1..=10).map(f64::from).collect();
/// assert_eq!(mean_on(&t, &t, 4.0, 8.0, Bounds::HALF_OPEN).unwrap(), 5.5);
/// assert_eq!(mean_on(&t, &t, 4.0, 8.0, Bounds::OPEN).unwrap(), 6.0);
/// ```
///
/// # Errors
/// - `LengthMismatch`, or any error of [`select`].
/// - `EmptyInterval` if no sample falls inside the interval.
pub fn mean_on(
    times: &[f64],
    values: &[f64],
    t0: f64,
    t1: f64,
    bounds: Bounds,
) -> Result<f64, DatkitError> {
    ensure_same_length(times, values)?;
    let (i, j) = select(times, t0, t1, bounds)?;
    mean_of(values, i, j)
}

/// Returns the mean of the values on `[t - lpad, t + rpad)`.
///
/// Both padded times must be present in the data (see [`locate_range`]).
///
/// # Errors
/// - `LengthMismatch`, or any error of [`locate_range`].
/// - `EmptyInterval` if the located range is empty, e.g. when both pads are
///   unset.
pub fn mean_around(
    times: &[f64],
    values: &[f64],
    t: f64,
    lpad: Option<f64>,
    rpad: Option<f64>,
    ttol: f64,
) -> Result<f64, DatkitError> {
    ensure_same_length(times, values)?;
    let (i, j) = locate_range(times, t, lpad, rpad, ttol)?;
    mean_of(values, i, j)
}

/// Returns the time and value of the smallest value on `t0 .. t1`.
///
/// Ties resolve to the first occurrence.
///
/// # Errors
/// - `LengthMismatch`, or any error of [`select`].
/// - `EmptyInterval` if no sample falls inside the interval.
pub fn min_on(
    times: &[f64],
    values: &[f64],
    t0: f64,
    t1: f64,
    bounds: Bounds,
) -> Result<(f64, f64), DatkitError> {
    extremum_on(times, values, t0, t1, bounds, |v| -v)
}

/// Returns the time and value of the largest value on `t0 .. t1`.
///
/// Ties resolve to the first occurrence.
///
/// # Errors
/// - `LengthMismatch`, or any error of [`select`].
/// - `EmptyInterval` if no sample falls inside the interval.
pub fn max_on(
    times: &[f64],
    values: &[f64],
    t0: f64,
    t1: f64,
    bounds: Bounds,
) -> Result<(f64, f64), DatkitError> {
    extremum_on(times, values, t0, t1, bounds, |v| v)
}

/// Returns the time and (signed) value of the largest absolute value on `t0 .. t1`.
///
/// Ties resolve to the first occurrence.
///
/// # Errors
/// - `LengthMismatch`, or any error of [`select`].
/// - `EmptyInterval` if no sample falls inside the interval.
pub fn abs_max_on(
    times: &[f64],
    values: &[f64],
    t0: f64,
    t1: f64,
    bounds: Bounds,
) -> Result<(f64, f64), DatkitError> {
    extremum_on(times, values, t0, t1, bounds, f64::abs)
}

fn mean_of(values: &[f64], i: usize, j: usize) -> Result<f64, DatkitError> {
    if i >= j {
        return Err(DatkitError::EmptyInterval { start: i, end: j });
    }
    let window = &values[i..j];
    #[allow(clippy::cast_precision_loss)]
    let n = window.len() as f64;
    Ok(window.iter().sum::<f64>() / n)
}

/// Position of the largest `key(value)` on the selected slice.
///
/// A later sample only replaces the current best when its key is strictly
/// greater, so ties keep the first occurrence and NaN keys never win.
fn extremum_on<K>(
    times: &[f64],
    values: &[f64],
    t0: f64,
    t1: f64,
    bounds: Bounds,
    key: K,
) -> Result<(f64, f64), DatkitError>
where
    K: Fn(f64) -> f64,
{
    ensure_same_length(times, values)?;
    let (i, j) = select(times, t0, t1, bounds)?;
    if i >= j {
        return Err(DatkitError::EmptyInterval { start: i, end: j });
    }

    let mut best = i;
    let mut best_key = key(values[i]);
    for (k, &v) in values.iter().enumerate().take(j).skip(i + 1) {
        let kv = key(v);
        if kv > best_key || (best_key.is_nan() && !kv.is_nan()) {
            best = k;
            best_key = kv;
        }
    }
    Ok((times[best], values[best]))
}
