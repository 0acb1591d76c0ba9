//! Time-series utilities for regularly sampled, increasing time vectors.
//!
//! Modules include:
//! - `check`: sampling interval and (regular) monotonicity checks
//! - `locate`: tolerant time-to-index lookup
//! - `select`: interval-to-index-pair selection with inclusivity flags
//! - `points`: values at/near a time and aggregates over an interval
//! - `smoothing`: Gaussian and moving-average filters
//! - `resample`: Haar-style pairwise downsampling
/// Sampling interval and monotonicity checks.
pub mod check;
/// Tolerant lookup of times in a sorted time vector.
pub mod locate;
/// Point accessors and interval aggregates.
pub mod points;
/// Pairwise downsampling.
pub mod resample;
/// Selection of index ranges from time intervals.
pub mod select;
/// Windowed smoothing filters.
pub mod smoothing;
/// Shared helpers for series invariants.
pub mod util;
