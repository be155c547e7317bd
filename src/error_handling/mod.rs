//! Error types.
//!
//! This module provides:
//! - `ResolutionError`: failures of a single redirect resolution
//! - `ErrorKind`: the category names reported to HTTP clients
//! - `InitializationError`: failures while building the logger or HTTP client
//!
//! Every resolution error is terminal for the request it belongs to; nothing
//! is retried beyond the HEAD-to-GET fallback inside the client adapter.

mod types;

// Re-export public API
pub use types::{ErrorKind, InitializationError, ResolutionError};
