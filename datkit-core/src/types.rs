//! Re-export of foundational types from `datkit-types`.
// Consolidated re-exports so downstream crates can depend on `datkit-core` only

pub use datkit_types::{
    Bounds, DEFAULT_RTOL, DEFAULT_TTOL, DatkitConfig, DatkitError, MIN_WINDOW_RATIO,
    check_tolerance,
};

