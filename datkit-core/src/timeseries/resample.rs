use crate::DatkitError;
use crate::timeseries::util::{ensure_same_length, pairwise_mean};

/// Downsample by repeated averaging of adjacent samples, similar to a Haar wavelet.
///
/// In each of the `repeats` passes a trailing unpaired sample is dropped and
/// each adjacent pair of samples (times and values alike) is replaced by its
/// mean, halving the length. A series of length 0 or 1 becomes empty, and
/// further passes on an empty series leave it empty.
///
/// ```
/// use datkit_core::haar_downsample;
///
/// let t: Vec<f64> = (0..10).map(f64::from).collect();
/// let v = [5.0, 1.0, 8.0, 12.0, 3.0, 3.0, 1.0, 9.0, 2.0, 7.0];
/// let (x, y) = haar_downsample(&t, &v, 1).unwrap();
/// assert_eq!(x, vec![0.5, 2.5, 4.5, 6.5, 8.5]);
/// assert_eq!(y, vec![3.0, 10.0, 3.0, 5.0, 4.5]);
/// ```
///
/// # Errors
/// Returns `Err(DatkitError::LengthMismatch)` if `times` and `values` differ
/// in length.
pub fn haar_downsample(
    times: &[f64],
    values: &[f64],
    repeats: usize,
) -> Result<(Vec<f64>, Vec<f64>), DatkitError> {
    ensure_same_length(times, values)?;

    let mut times = times.to_vec();
    let mut values = values.to_vec();
    for _ in 0..repeats {
        if times.is_empty() {
            break;
        }
        times = pairwise_mean(&times);
        values = pairwise_mean(&values);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(repeats, len = times.len(), "haar downsampled");
    Ok((times, values))
}
