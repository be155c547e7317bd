//! CORS header values.
//!
//! Every response from the HTTP endpoint carries these, and preflight
//! (`OPTIONS`) requests are answered with them and no body.

/// Any origin may call the endpoint
pub const CORS_ALLOW_ORIGIN: &str = "*";

/// Methods accepted by the endpoint
pub const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";

/// Request headers browsers may send along
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, Content-Length, Accept-Encoding, Authorization, Accept, Origin, Cache-Control, X-Requested-With";
