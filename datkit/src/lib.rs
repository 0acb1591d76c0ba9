//! Datkit analyses regularly sampled, increasing time series.
//!
//! Overview
//! - Wraps the free functions of `datkit_core` behind a `Datkit` analyser that
//!   supplies a configured time tolerance and interval bounds to every call.
//! - Works on owned [`TimeSeries`] values; filters return new series.
//! - Exposes uniform error and configuration types from `datkit_types`.
//!
//! Key behaviors and trade-offs
//! - Lookup: `locate` and `value_at` match times within `ttol` and fail
//!   otherwise; `locate_nearest` and `value_near` always pick the closest
//!   sample inside the data and tolerate half a step of overshoot.
//! - Intervals: `select` and the aggregates compare times exactly against the
//!   bounds `[t0, t1)` by default; toggle either end with the builder.
//! - Filters: smoothing uses a valid convolution, so a window of `w` samples
//!   trims `w / 2` samples from each end rather than padding.
//! - Inputs are never modified; every call allocates its own output.
//!
//! Examples
//! Building an analyser and aggregating over an interval:
//! ```
//! use datkit::{Bounds, Datkit, TimeSeries};
//!
//! let times: Vec<f64> = (0..10).map(f64::from).collect();
//! let values: Vec<f64> = times.iter().map(|t| t * t).collect();
//! let series = TimeSeries::new(times, values)?;
//!
//! let dk = Datkit::builder().bounds(Bounds::CLOSED).build()?;
//! assert_eq!(dk.select(&series, 2.0, 4.0)?, (2, 5));
//! assert_eq!(dk.max_on(&series, 2.0, 4.0)?, (4.0, 16.0));
//! # Ok::<(), datkit::DatkitError>(())
//! ```
//!
//! Smoothing with a window given as a duration:
//! ```
//! use datkit::{Datkit, TimeSeries, Window};
//!
//! let times: Vec<f64> = (0..100).map(|i| f64::from(i) * 0.1).collect();
//! let values = vec![2.0; 100];
//! let series = TimeSeries::new(times, values)?;
//!
//! let smooth = Datkit::new().moving_average(&series, Window::Duration(0.5))?;
//! assert_eq!(smooth.len(), 96);
//! # Ok::<(), datkit::DatkitError>(())
//! ```
//!
//! See `demos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod ops;

pub use crate::core::{Datkit, DatkitBuilder};

// Re-export core types for convenience
pub use datkit_core::{
    Bounds, DEFAULT_RTOL, DEFAULT_TTOL, DatkitConfig, DatkitError, MIN_WINDOW_RATIO, TimeSeries,
    Window, gaussian_kernel,
};
