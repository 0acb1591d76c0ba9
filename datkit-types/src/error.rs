use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the datkit workspace.
///
/// Every variant describes a caller-visible contract violation or malformed
/// input. Nothing is retried or recovered internally and no partial results
/// are returned alongside an error.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
#[non_exhaustive]
pub enum DatkitError {
    /// The query time lies outside the data by more than the allowed margin.
    #[error("time {t} is outside the provided range [{first}, {last}]")]
    OutOfRange {
        /// Requested time.
        t: f64,
        /// First time in the series.
        first: f64,
        /// Last time in the series.
        last: f64,
    },

    /// No sample lies within tolerance of the query time.
    #[error("time {t} is not present in the data; nearest is {nearest} at index {index}")]
    NotFound {
        /// Requested time.
        t: f64,
        /// Closest time that was found.
        nearest: f64,
        /// Index of the closest time.
        index: usize,
    },

    /// Left or right padding was negative (or not a number).
    #[error("left and right padding must be unset, zero, or positive (lpad={lpad:?}, rpad={rpad:?})")]
    InvalidPadding {
        /// Left padding as given.
        lpad: Option<f64>,
        /// Right padding as given.
        rpad: Option<f64>,
    },

    /// The interval end is not strictly greater than its start.
    #[error("interval end {t1} must be greater than interval start {t0}")]
    InvalidInterval {
        /// Interval start.
        t0: f64,
        /// Interval end.
        t1: f64,
    },

    /// The time series has no samples.
    #[error("time series must contain at least one sample")]
    EmptySeries,

    /// The selected index range contains no samples.
    #[error("selected interval [{start}, {end}) contains no samples")]
    EmptyInterval {
        /// First selected index.
        start: usize,
        /// One past the last selected index.
        end: usize,
    },

    /// Window parameters were both given or both missing.
    #[error("ambiguous window: {0}")]
    AmbiguousWindow(String),

    /// Window parameters violate the odd/size/duration constraints.
    #[error("invalid window size: {0}")]
    InvalidWindow(String),

    /// Times and values have different lengths.
    #[error("times and values must have the same length (got {times} and {values})")]
    LengthMismatch {
        /// Number of times.
        times: usize,
        /// Number of values.
        values: usize,
    },

    /// The series has fewer samples than the operation needs.
    #[error("need at least {needed} samples, got {got}")]
    TooShort {
        /// Minimum number of samples.
        needed: usize,
        /// Number of samples available.
        got: usize,
    },

    /// Invalid input argument, e.g. a negative tolerance.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl DatkitError {
    /// Helper: build an `OutOfRange` error for `t` against the edges of `times`.
    #[must_use]
    pub const fn out_of_range(t: f64, first: f64, last: f64) -> Self {
        Self::OutOfRange { t, first, last }
    }

    /// Helper: build a `NotFound` error naming the closest sample.
    #[must_use]
    pub const fn not_found(t: f64, nearest: f64, index: usize) -> Self {
        Self::NotFound { t, nearest, index }
    }

    /// Helper: build an `InvalidWindow` error from a message.
    pub fn invalid_window(msg: impl Into<String>) -> Self {
        Self::InvalidWindow(msg.into())
    }

    /// Helper: build an `AmbiguousWindow` error from a message.
    pub fn ambiguous_window(msg: impl Into<String>) -> Self {
        Self::AmbiguousWindow(msg.into())
    }

    /// Helper: build an `InvalidArg` error from a message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `LengthMismatch` error.
    #[must_use]
    pub const fn length_mismatch(times: usize, values: usize) -> Self {
        Self::LengthMismatch { times, values }
    }
}
