//! Windowed smoothing filters: Gaussian kernel and moving average.
//!
//! Both filters use a "valid" convolution: no padding is applied, so a series
//! of `n` samples smoothed with a window of `w` samples yields `n - w + 1`
//! outputs. Each output is paired with the time at the centre of its window.

use serde::{Deserialize, Serialize};

use crate::timeseries::check::sampling_interval;
use crate::timeseries::util::ensure_same_length;
use crate::{DatkitError, MIN_WINDOW_RATIO};

/// Width of a smoothing window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Window {
    /// An explicit number of samples; must be odd and at least 3.
    Samples(usize),
    /// A duration, converted to samples using the sampling interval.
    Duration(f64),
}

impl Window {
    /// Build a window from two optional parameters, exactly one of which must be set.
    ///
    /// `w` is rounded to the nearest integer, ties to even, before use.
    ///
    /// # Errors
    /// - `AmbiguousWindow` if both or neither of `w` and `t` are given.
    /// - `InvalidWindow` if `w` is negative, NaN, or not odd and at least 3
    ///   after rounding.
    pub fn from_parts(w: Option<f64>, t: Option<f64>) -> Result<Self, DatkitError> {
        match (w, t) {
            (None, None) => Err(DatkitError::ambiguous_window(
                "no window size specified: w and t are both unset",
            )),
            (Some(_), Some(_)) => Err(DatkitError::ambiguous_window(
                "two window sizes specified: w and t are both set",
            )),
            (Some(w), None) => {
                let rounded = w.round_ties_even();
                if !rounded.is_finite() || rounded < 3.0 {
                    return Err(DatkitError::invalid_window(format!(
                        "must be an odd number equal to or greater than 3, got {w}"
                    )));
                }
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let samples = rounded as usize;
                Ok(Self::Samples(samples))
            }
            (None, Some(t)) => Ok(Self::Duration(t)),
        }
    }

    /// Resolve this window to a number of samples for the given time vector.
    ///
    /// For [`Window::Duration`] the size is `1 + 2 * floor((t / dt) / 2)`,
    /// the odd integer nearest to `t / dt` rounding down, where `dt` is the
    /// sampling interval.
    ///
    /// # Errors
    /// - `InvalidWindow` if an explicit size is even or below 3, if a duration
    ///   is shorter than `2.9` sampling intervals, or if the resulting window
    ///   is longer than `times`.
    /// - `EmptySeries` / `TooShort` if a duration is given and `times` has
    ///   fewer than two samples.
    pub fn size_for(self, times: &[f64]) -> Result<usize, DatkitError> {
        let w = match self {
            Self::Samples(w) => {
                if w < 3 || w % 2 == 0 {
                    return Err(DatkitError::invalid_window(format!(
                        "must be an odd number equal to or greater than 3, got {w}"
                    )));
                }
                w
            }
            Self::Duration(t) => {
                let dt = sampling_interval(times)?;
                let ratio = t / dt;
                if ratio.is_nan() || ratio < MIN_WINDOW_RATIO {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(t, dt, ratio, "window duration too short");
                    return Err(DatkitError::invalid_window(format!(
                        "must be at least three times the sampling interval {dt}, got {t}"
                    )));
                }
                // Saturates for huge ratios; the length check below rejects those.
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let half = (ratio / 2.0).floor() as usize;
                half.saturating_mul(2).saturating_add(1)
            }
        };
        if w > times.len() {
            #[cfg(feature = "tracing")]
            tracing::debug!(samples = w, len = times.len(), "window longer than series");
            return Err(DatkitError::invalid_window(format!(
                "must be no greater than length of times vector ({}), got {w}",
                times.len()
            )));
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(window = ?self, samples = w, "resolved window size");
        Ok(w)
    }
}

/// Returns a window size of either `w` samples or duration `t`.
///
/// Exactly one of the two must be given; see [`Window::from_parts`] and
/// [`Window::size_for`].
///
/// ```
/// use datkit_core::{DatkitError, window_size};
///
/// let times: Vec<f64> = (0..10).map(f64::from).collect();
/// assert_eq!(window_size(&times, Some(5.0), None).unwrap(), 5);
/// assert_eq!(window_size(&times, None, Some(4.5)).unwrap(), 5);
/// assert!(matches!(
///     window_size(&times, Some(4.0), None),
///     Err(DatkitError::InvalidWindow(_))
/// ));
/// ```
///
/// # Errors
/// `AmbiguousWindow`, `InvalidWindow`, or the errors of `sampling_interval`.
pub fn window_size(times: &[f64], w: Option<f64>, t: Option<f64>) -> Result<usize, DatkitError> {
    Window::from_parts(w, t)?.size_for(times)
}

/// Normalised Gaussian kernel of `w` samples.
///
/// The kernel is `exp(-x^2)` for `w` points evenly spaced on `[-2, 2]`,
/// divided by its sum.
#[must_use]
pub fn gaussian_kernel(w: usize) -> Vec<f64> {
    if w <= 1 {
        return vec![1.0; w];
    }
    #[allow(clippy::cast_precision_loss)]
    let step = 4.0 / (w - 1) as f64;
    let raw: Vec<f64> = (0..w)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let x = -2.0 + step * i as f64;
            (-x * x).exp()
        })
        .collect();
    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|k| k / total).collect()
}

/// Applies a Gaussian smoothing filter to `values`.
///
/// Returns a new series `(times', values')` of length `n - w + 1`.
///
/// # Errors
/// `LengthMismatch`, or any error of [`Window::size_for`].
pub fn gaussian_smoothing(
    times: &[f64],
    values: &[f64],
    window: Window,
) -> Result<(Vec<f64>, Vec<f64>), DatkitError> {
    ensure_same_length(times, values)?;
    let w = window.size_for(times)?;
    let kernel = gaussian_kernel(w);
    let smoothed: Vec<f64> = values
        .windows(w)
        .map(|win| win.iter().zip(&kernel).map(|(v, k)| v * k).sum::<f64>())
        .collect();
    Ok((centred_times(times, w), smoothed))
}

/// Applies a moving average filter to `values`.
///
/// Returns a new series `(times', values')` of length `n - w + 1`.
///
/// ```
/// use datkit_core::{Window, moving_average};
///
/// let t: Vec<f64> = (0..5).map(f64::from).collect();
/// let (x, y) = moving_average(&t, &t, Window::Samples(3)).unwrap();
/// assert_eq!(x, vec![1.0, 2.0, 3.0]);
/// assert_eq!(y, vec![1.0, 2.0, 3.0]);
/// ```
///
/// # Errors
/// `LengthMismatch`, or any error of [`Window::size_for`].
pub fn moving_average(
    times: &[f64],
    values: &[f64],
    window: Window,
) -> Result<(Vec<f64>, Vec<f64>), DatkitError> {
    ensure_same_length(times, values)?;
    let w = window.size_for(times)?;
    #[allow(clippy::cast_precision_loss)]
    let width = w as f64;
    let averaged: Vec<f64> = values
        .windows(w)
        .map(|win| win.iter().sum::<f64>() / width)
        .collect();
    Ok((centred_times(times, w), averaged))
}

/// Times at the centre of each full window of `w` samples.
fn centred_times(times: &[f64], w: usize) -> Vec<f64> {
    let half = w / 2;
    times[half..times.len() - half].to_vec()
}
