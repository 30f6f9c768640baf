//! Configuration module for argus-utils
//!
//! This module provides configuration constants, default values, and configuration types
//! for the helper routines.

mod constants;
mod types;

// Re-export all constants and types
pub use constants::*;
pub use types::*;
