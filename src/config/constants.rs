//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, redirect limits, and endpoint locations.

// Redirect handling
/// Maximum number of redirect hops to follow
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 10;

// Network operation timeouts
/// Per-request timeout in seconds, applied to each HEAD and GET attempt
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent string for outbound requests.
///
/// Identifies the tracker honestly instead of impersonating a browser.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; RedirectTracker/1.0)";

// HTTP endpoint
/// Default socket address for `serve`
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
/// Route of the redirect tracking endpoint
pub const TRACK_REDIRECT_PATH: &str = "/api/track-redirect";
