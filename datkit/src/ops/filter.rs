use datkit_core::{DatkitError, TimeSeries, Window};

use crate::Datkit;

impl Datkit {
    /// Resolve a window given either as `w` samples or as a duration `t`.
    ///
    /// # Errors
    /// `AmbiguousWindow` unless exactly one of `w` and `t` is set, and
    /// `InvalidWindow` if the resolved size is not odd, below 3, or longer
    /// than the series.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "datkit::window_size",
            skip(self, series),
            fields(len = series.len()),
        )
    )]
    pub fn window_size(
        &self,
        series: &TimeSeries,
        w: Option<f64>,
        t: Option<f64>,
    ) -> Result<usize, DatkitError> {
        datkit_core::window_size(series.times(), w, t)
    }

    /// Gaussian-smoothed copy of `series`, `w - 1` samples shorter.
    ///
    /// # Errors
    /// Any error of [`Window::size_for`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "datkit::gaussian_smoothing",
            skip(self, series),
            fields(len = series.len()),
        )
    )]
    pub fn gaussian_smoothing(
        &self,
        series: &TimeSeries,
        window: Window,
    ) -> Result<TimeSeries, DatkitError> {
        let (times, values) =
            datkit_core::gaussian_smoothing(series.times(), series.values(), window)?;
        TimeSeries::new(times, values)
    }

    /// Moving-average copy of `series`, `w - 1` samples shorter.
    ///
    /// # Errors
    /// Any error of [`Window::size_for`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "datkit::moving_average",
            skip(self, series),
            fields(len = series.len()),
        )
    )]
    pub fn moving_average(
        &self,
        series: &TimeSeries,
        window: Window,
    ) -> Result<TimeSeries, DatkitError> {
        let (times, values) =
            datkit_core::moving_average(series.times(), series.values(), window)?;
        TimeSeries::new(times, values)
    }

    /// Series halved in length `repeats` times by averaging adjacent pairs.
    ///
    /// # Errors
    /// Returns `LengthMismatch` only for mismatched inputs, which `TimeSeries`
    /// construction already rules out.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "datkit::haar_downsample",
            skip(self, series),
            fields(len = series.len()),
        )
    )]
    pub fn haar_downsample(
        &self,
        series: &TimeSeries,
        repeats: usize,
    ) -> Result<TimeSeries, DatkitError> {
        let (times, values) =
            datkit_core::haar_downsample(series.times(), series.values(), repeats)?;
        TimeSeries::new(times, values)
    }
}
