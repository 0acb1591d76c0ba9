use crate::DatkitError;
use crate::timeseries::util::ensure_non_empty;

/// Mean spacing between consecutive times.
///
/// Computed as `(times[n-1] - times[0]) / (n - 1)`, which equals the mean of
/// the consecutive differences.
///
/// ```
/// use datkit_core::sampling_interval;
///
/// let times = [0.0, 0.5, 1.0, 1.5, 2.0];
/// assert_eq!(sampling_interval(&times).unwrap(), 0.5);
/// ```
///
/// # Errors
/// - Returns `Err(DatkitError::EmptySeries)` if `times` is empty.
/// - Returns `Err(DatkitError::TooShort)` if `times` has a single sample.
pub fn sampling_interval(times: &[f64]) -> Result<f64, DatkitError> {
    let (first, last) = ensure_non_empty(times)?;
    if times.len() < 2 {
        return Err(DatkitError::TooShort {
            needed: 2,
            got: times.len(),
        });
    }
    #[allow(clippy::cast_precision_loss)]
    let steps = (times.len() - 1) as f64;
    Ok((last - first) / steps)
}

/// Returns `true` if every time is strictly greater than the one before it.
///
/// Empty and single-sample series are trivially increasing.
#[must_use]
pub fn is_increasing(times: &[f64]) -> bool {
    times.windows(2).all(|w| w[1] > w[0])
}

/// Returns `true` if `times` is increasing with a (near) constant step.
///
/// Every consecutive difference `d` must satisfy `|d - dt| <= rtol * dt`,
/// where `dt` is the [`sampling_interval`]. Series with fewer than two samples
/// are regular.
#[must_use]
pub fn is_regularly_increasing(times: &[f64], rtol: f64) -> bool {
    if !is_increasing(times) {
        return false;
    }
    let Ok(dt) = sampling_interval(times) else {
        return true;
    };
    let tol = rtol * dt;
    times.windows(2).all(|w| ((w[1] - w[0]) - dt).abs() <= tol)
}
