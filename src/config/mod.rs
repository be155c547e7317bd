//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, redirect limits, endpoint paths)
//! - CORS header constants for the HTTP endpoint
//! - Library configuration and CLI option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Command, Config, LogFormat, LogLevel, Opt};
