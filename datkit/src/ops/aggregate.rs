use datkit_core::{DatkitError, TimeSeries};

use crate::Datkit;
use crate::ops::macros::interval_method;

impl Datkit {
    /// Value of the sample at time `t`, matched within the configured `ttol`.
    ///
    /// # Errors
    /// Any error of [`Datkit::locate`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "datkit::value_at", skip(self, series), fields(len = series.len()))
    )]
    pub fn value_at(&self, series: &TimeSeries, t: f64) -> Result<f64, DatkitError> {
        datkit_core::value_at(series.times(), series.values(), t, self.cfg.ttol)
    }

    /// Value of the sample nearest to `t`.
    ///
    /// # Errors
    /// Any error of [`Datkit::locate_nearest`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "datkit::value_near",
            skip(self, series),
            fields(len = series.len()),
        )
    )]
    pub fn value_near(&self, series: &TimeSeries, t: f64) -> Result<f64, DatkitError> {
        datkit_core::value_near(series.times(), series.values(), t)
    }

    /// Mean of the values on `[t - lpad, t + rpad)`.
    ///
    /// # Errors
    /// Any error of [`Datkit::locate_range`], or `EmptyInterval` when the
    /// located range is empty.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "datkit::mean_around",
            skip(self, series),
            fields(len = series.len()),
        )
    )]
    pub fn mean_around(
        &self,
        series: &TimeSeries,
        t: f64,
        lpad: Option<f64>,
        rpad: Option<f64>,
    ) -> Result<f64, DatkitError> {
        datkit_core::mean_around(
            series.times(),
            series.values(),
            t,
            lpad,
            rpad,
            self.cfg.ttol,
        )
    }

    interval_method! {
        /// Mean of the values on the interval `t0 .. t1`.
        method: mean_on -> f64,
        span: "datkit::mean_on",
        call: datkit_core::mean_on
    }

    interval_method! {
        /// Time and value of the smallest value on `t0 .. t1` (first on ties).
        method: min_on -> (f64, f64),
        span: "datkit::min_on",
        call: datkit_core::min_on
    }

    interval_method! {
        /// Time and value of the largest value on `t0 .. t1` (first on ties).
        method: max_on -> (f64, f64),
        span: "datkit::max_on",
        call: datkit_core::max_on
    }

    interval_method! {
        /// Time and signed value of the largest absolute value on `t0 .. t1`
        /// (first on ties).
        method: abs_max_on -> (f64, f64),
        span: "datkit::abs_max_on",
        call: datkit_core::abs_max_on
    }
}
