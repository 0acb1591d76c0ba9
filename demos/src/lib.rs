//! Shared helpers for the datkit demo programs.

pub mod common;
