//! datkit-core
//!
//! Functions to work with regularly sampled time series, given as parallel
//! slices of times and values.
//!
//! - `timeseries`: lookup, interval selection, aggregates and filters.
//! - `series`: the owned `TimeSeries` container.
//! - `types`: error and configuration types re-exported from `datkit-types`.
//!
//! Assumptions
//! -----------
//! Every function assumes `times` is strictly increasing and (for the filters)
//! regularly sampled. This is not checked: results for other inputs are
//! unspecified, though no function panics on them. Use [`is_increasing`] or
//! [`is_regularly_increasing`] to check data from untrusted sources.
//!
//! All inputs are borrowed immutably and every call returns freshly
//! allocated outputs.
//!
//! Logging
//! -------
//! With the `tracing` feature enabled, rejected inputs are reported at
//! `debug` level and resolved indices/windows at `trace` level.
#![warn(missing_docs)]

/// Owned time series container.
pub mod series;
/// Time-series lookup, selection, aggregation and smoothing.
pub mod timeseries;
pub mod types;

pub use series::TimeSeries;
pub use timeseries::check::{is_increasing, is_regularly_increasing, sampling_interval};
pub use timeseries::locate::{locate, locate_nearest, locate_range};
pub use timeseries::points::{
    abs_max_on, max_on, mean_around, mean_on, min_on, value_at, value_near,
};
pub use timeseries::resample::haar_downsample;
pub use timeseries::select::{select, select_span};
pub use timeseries::smoothing::{
    Window, gaussian_kernel, gaussian_smoothing, moving_average, window_size,
};
pub use types::*;
