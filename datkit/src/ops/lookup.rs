use datkit_core::{DatkitError, TimeSeries};

use crate::Datkit;

impl Datkit {
    /// Index of the sample at time `t`, matched within the configured `ttol`.
    ///
    /// # Errors
    /// `EmptySeries`, `OutOfRange` if `t` lies farther than `ttol` beyond the
    /// data, or `NotFound` if no sample is within `ttol` of `t`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "datkit::locate", skip(self, series), fields(len = series.len()))
    )]
    pub fn locate(&self, series: &TimeSeries, t: f64) -> Result<usize, DatkitError> {
        datkit_core::locate(series.times(), t, self.cfg.ttol)
    }

    /// Half-open index range covering `[t - lpad, t + rpad)`.
    ///
    /// Both padded times must be present in the series within `ttol`.
    ///
    /// # Errors
    /// `InvalidPadding` for a negative or NaN pad, or any error of
    /// [`Datkit::locate`] for the padded times.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "datkit::locate_range",
            skip(self, series),
            fields(len = series.len()),
        )
    )]
    pub fn locate_range(
        &self,
        series: &TimeSeries,
        t: f64,
        lpad: Option<f64>,
        rpad: Option<f64>,
    ) -> Result<(usize, usize), DatkitError> {
        datkit_core::locate_range(series.times(), t, lpad, rpad, self.cfg.ttol)
    }

    /// Index of the sample nearest to `t`.
    ///
    /// # Errors
    /// `EmptySeries`, or `OutOfRange` if `t` overshoots the data by more
    /// than half a sampling interval.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "datkit::locate_nearest",
            skip(self, series),
            fields(len = series.len()),
        )
    )]
    pub fn locate_nearest(&self, series: &TimeSeries, t: f64) -> Result<usize, DatkitError> {
        datkit_core::locate_nearest(series.times(), t)
    }

    /// Index pair `(i, j)` such that `series[i..j]` lies in `t0 .. t1` under
    /// the configured bounds.
    ///
    /// # Errors
    /// `EmptySeries`, or `InvalidInterval` unless `t1 > t0`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "datkit::select", skip(self, series), fields(len = series.len()))
    )]
    pub fn select(
        &self,
        series: &TimeSeries,
        t0: f64,
        t1: f64,
    ) -> Result<(usize, usize), DatkitError> {
        datkit_core::select(series.times(), t0, t1, self.cfg.bounds)
    }

    /// Like [`Datkit::select`] with either end left open.
    ///
    /// # Errors
    /// `EmptySeries`, or `InvalidInterval` if both ends are given and
    /// `t1 <= t0` or if a given end is NaN.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "datkit::select_span",
            skip(self, series),
            fields(len = series.len()),
        )
    )]
    pub fn select_span(
        &self,
        series: &TimeSeries,
        t0: Option<f64>,
        t1: Option<f64>,
    ) -> Result<(usize, usize), DatkitError> {
        datkit_core::select_span(series.times(), t0, t1, self.cfg.bounds)
    }

    /// Mean spacing between consecutive sample times.
    ///
    /// # Errors
    /// `EmptySeries` or `TooShort` for series with fewer than two samples.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "datkit::sampling_interval",
            skip(self, series),
            fields(len = series.len()),
        )
    )]
    pub fn sampling_interval(&self, series: &TimeSeries) -> Result<f64, DatkitError> {
        datkit_core::sampling_interval(series.times())
    }

    /// Whether the sample times increase with a near-constant step, within the
    /// configured `regularity_rtol`.
    #[must_use]
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "datkit::is_regularly_increasing",
            skip(self, series),
            fields(len = series.len(), rtol = self.cfg.regularity_rtol),
        )
    )]
    pub fn is_regularly_increasing(&self, series: &TimeSeries) -> bool {
        datkit_core::is_regularly_increasing(series.times(), self.cfg.regularity_rtol)
    }
}
