//! Request and response bodies for the HTTP endpoint.

use serde::{Deserialize, Serialize};

use crate::error_handling::ErrorKind;
use crate::fetch::RedirectResolver;
use crate::models::ResolutionResult;
use crate::utils::unescape_unicode;

/// Shared state for the handlers. Read-only; cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Resolver shared by all requests
    pub resolver: RedirectResolver,
}

impl AppState {
    /// Wraps a resolver.
    pub fn new(resolver: RedirectResolver) -> Self {
        AppState { resolver }
    }
}

/// `{"url": "..."}` body for POST.
#[derive(Debug, Default, Deserialize)]
pub struct TrackRequest {
    pub url: Option<String>,
}

/// 200 body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackResponse {
    pub success: bool,
    pub original_url: String,
    /// Final URL with literal `\uXXXX` escapes decoded
    pub final_url: String,
    /// Final URL exactly as resolved
    pub raw_final_url: String,
    pub redirect_count: usize,
    pub redirect_chain: Vec<String>,
}

impl From<ResolutionResult> for TrackResponse {
    fn from(result: ResolutionResult) -> Self {
        TrackResponse {
            success: true,
            original_url: result.original_url,
            final_url: unescape_unicode(&result.final_url),
            raw_final_url: result.final_url,
            redirect_count: result.redirect_count,
            redirect_chain: result.redirect_chain,
        }
    }
}

/// 400 body.
#[derive(Debug, Serialize)]
pub struct ClientErrorResponse {
    pub error: ErrorKind,
    pub message: String,
}

/// 500 body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionErrorResponse {
    pub error: ErrorKind,
    pub message: String,
    pub original_url: String,
}
