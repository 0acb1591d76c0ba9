//! Shared helpers for series invariants and sorted-slice searches.

use crate::DatkitError;

/// Ensure `times` and `values` describe the same number of samples.
///
/// # Errors
/// Returns `Err(DatkitError::LengthMismatch)` if the lengths differ.
pub fn ensure_same_length(times: &[f64], values: &[f64]) -> Result<(), DatkitError> {
    if times.len() == values.len() {
        Ok(())
    } else {
        Err(DatkitError::length_mismatch(times.len(), values.len()))
    }
}

/// Ensure the series has at least one sample and return its first and last time.
///
/// # Errors
/// Returns `Err(DatkitError::EmptySeries)` if `times` is empty.
pub fn ensure_non_empty(times: &[f64]) -> Result<(f64, f64), DatkitError> {
    match (times.first(), times.last()) {
        (Some(&first), Some(&last)) => Ok((first, last)),
        _ => Err(DatkitError::EmptySeries),
    }
}

/// First position `p` with `times[p] >= t` (`times.len()` if there is none).
pub(crate) fn leftmost_insertion(times: &[f64], t: f64) -> usize {
    times.partition_point(|&x| x < t)
}

/// Average adjacent pairs of `xs`, ignoring a trailing unpaired element.
pub(crate) fn pairwise_mean(xs: &[f64]) -> Vec<f64> {
    xs.chunks_exact(2).map(|p| 0.5 * (p[0] + p[1])).collect()
}
