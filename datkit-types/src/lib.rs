//! Error and configuration primitives shared by the datkit crates.
#![warn(missing_docs)]

mod config;
mod error;

pub use config::{
    Bounds, DEFAULT_RTOL, DEFAULT_TTOL, DatkitConfig, MIN_WINDOW_RATIO, check_tolerance,
};
pub use error::DatkitError;
