//! Utility functions.
//!
//! This module provides:
//! - Unicode-escape decoding for display of resolved URLs

mod unescape;

pub use unescape::unescape_unicode;
