/// Generate an analyser method that selects `t0 .. t1` with the configured
/// bounds and hands the selection to a core aggregate.
///
/// The core function must take `(times, values, t0, t1, bounds)`.
macro_rules! interval_method {
    (
        $(#[$meta:meta])*
        method: $name:ident -> $ret:ty,
        span: $span:tt,
        call: $core_fn:path
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(
                name = $span,
                skip(self, series),
                fields(len = series.len()),
            )
        )]
        ///
        /// # Errors
        /// Returns `InvalidInterval` unless `t1 > t0`, `EmptySeries` for an empty
        /// series, and `EmptyInterval` if no sample falls inside the interval.
        pub fn $name(
            &self,
            series: &datkit_core::TimeSeries,
            t0: f64,
            t1: f64,
        ) -> Result<$ret, datkit_core::DatkitError> {
            $core_fn(series.times(), series.values(), t0, t1, self.cfg.bounds)
        }
    };
}

pub(crate) use interval_method;
