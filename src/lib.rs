//! Rental Application Library
//!
//! This library provides the video rental catalog and shared utilities.

pub mod modules;
pub mod utils;

/// Re-export commonly used types
pub use modules::*;
