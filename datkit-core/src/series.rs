//! Owned time series container.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::DatkitError;
use crate::timeseries::util::ensure_same_length;

/// A time series held as two parallel vectors.
///
/// `times` is expected to be strictly increasing; this is not checked (see
/// [`crate::is_increasing`]). Only the length invariant is enforced, on
/// construction and on deserialization alike.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "SeriesParts")]
pub struct TimeSeries {
    times: Vec<f64>,
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct SeriesParts {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl TryFrom<SeriesParts> for TimeSeries {
    type Error = DatkitError;

    fn try_from(parts: SeriesParts) -> Result<Self, Self::Error> {
        Self::new(parts.times, parts.values)
    }
}

impl TimeSeries {
    /// Build a series from parallel time and value vectors.
    ///
    /// # Errors
    /// Returns `Err(DatkitError::LengthMismatch)` if the lengths differ.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self, DatkitError> {
        ensure_same_length(&times, &values)?;
        Ok(Self { times, values })
    }

    /// Build a series from UTC timestamps, stored as seconds since the Unix epoch.
    ///
    /// Sub-second precision is kept down to the nanosecond representable in `f64`.
    ///
    /// ```
    /// use chrono::DateTime;
    /// use datkit_core::TimeSeries;
    ///
    /// let ts = [
    ///     DateTime::from_timestamp(10, 0).unwrap(),
    ///     DateTime::from_timestamp(10, 500_000_000).unwrap(),
    /// ];
    /// let s = TimeSeries::from_timestamps(&ts, vec![1.0, 2.0]).unwrap();
    /// assert_eq!(s.times(), &[10.0, 10.5]);
    /// ```
    ///
    /// # Errors
    /// Returns `Err(DatkitError::LengthMismatch)` if the lengths differ.
    pub fn from_timestamps(
        timestamps: &[DateTime<Utc>],
        values: Vec<f64>,
    ) -> Result<Self, DatkitError> {
        let times = timestamps.iter().map(epoch_seconds).collect();
        Self::new(times, values)
    }

    /// Sample times.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Sample values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the series has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Split the series back into its time and value vectors.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.times, self.values)
    }
}

impl TryFrom<(Vec<f64>, Vec<f64>)> for TimeSeries {
    type Error = DatkitError;

    fn try_from((times, values): (Vec<f64>, Vec<f64>)) -> Result<Self, Self::Error> {
        Self::new(times, values)
    }
}

#[allow(clippy::cast_precision_loss)]
fn epoch_seconds(ts: &DateTime<Utc>) -> f64 {
    ts.timestamp() as f64 + f64::from(ts.timestamp_subsec_nanos()) / 1e9
}
