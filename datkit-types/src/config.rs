//! Configuration types shared by the core functions and the `Datkit` facade.

use serde::{Deserialize, Serialize};

use crate::DatkitError;

/// Default tolerance used when comparing two times for equality.
pub const DEFAULT_TTOL: f64 = 1e-9;

/// Default relative tolerance used when checking for regular sampling.
pub const DEFAULT_RTOL: f64 = 1e-6;

/// Smallest accepted ratio of window duration over sampling interval.
pub const MIN_WINDOW_RATIO: f64 = 2.9;

/// Inclusivity of the two ends of a time interval.
///
/// The flags are independent: callers combine them freely. The default is
/// the half-open interval `[t0, t1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    /// Include a sample lying exactly at the interval start.
    pub include_left: bool,
    /// Include a sample lying exactly at the interval end.
    pub include_right: bool,
}

impl Bounds {
    /// `[t0, t1)`
    pub const HALF_OPEN: Self = Self::new(true, false);
    /// `[t0, t1]`
    pub const CLOSED: Self = Self::new(true, true);
    /// `(t0, t1)`
    pub const OPEN: Self = Self::new(false, false);
    /// `(t0, t1]`
    pub const LEFT_OPEN: Self = Self::new(false, true);

    /// Build bounds from the two inclusivity flags.
    #[must_use]
    pub const fn new(include_left: bool, include_right: bool) -> Self {
        Self {
            include_left,
            include_right,
        }
    }

    /// Return a copy with `include_left` replaced.
    #[must_use]
    pub const fn with_left(mut self, include: bool) -> Self {
        self.include_left = include;
        self
    }

    /// Return a copy with `include_right` replaced.
    #[must_use]
    pub const fn with_right(mut self, include: bool) -> Self {
        self.include_right = include;
        self
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::HALF_OPEN
    }
}

/// Global configuration for the `Datkit` facade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatkitConfig {
    /// Two times are considered equal when they differ by at most `ttol`.
    pub ttol: f64,
    /// Default interval bounds for selections and aggregates.
    pub bounds: Bounds,
    /// Relative tolerance for `is_regularly_increasing`.
    pub regularity_rtol: f64,
}

impl Default for DatkitConfig {
    fn default() -> Self {
        Self {
            ttol: DEFAULT_TTOL,
            bounds: Bounds::default(),
            regularity_rtol: DEFAULT_RTOL,
        }
    }
}

impl DatkitConfig {
    /// Check that both tolerances are finite and non-negative.
    ///
    /// # Errors
    /// Returns `Err(DatkitError::InvalidArg)` naming the offending field.
    pub fn validate(&self) -> Result<(), DatkitError> {
        check_tolerance("ttol", self.ttol)?;
        check_tolerance("regularity_rtol", self.regularity_rtol)
    }
}

/// Reject negative, infinite or NaN tolerances.
///
/// # Errors
/// Returns `Err(DatkitError::InvalidArg)` if `value` is not a finite
/// non-negative number.
pub fn check_tolerance(name: &str, value: f64) -> Result<(), DatkitError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DatkitError::invalid_arg(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}
