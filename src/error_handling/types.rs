//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Why a redirect resolution failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// Both the HEAD and the GET attempt failed at the transport level.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The current URL or the `Location` target could not be parsed.
    #[error("failed to parse {context} {input:?}: {source}")]
    UrlParseFailed {
        /// Which value failed: "URL" (the base) or "redirect URL"
        context: &'static str,
        /// The offending text
        input: String,
        /// Parser error
        source: url::ParseError,
    },

    /// The hop limit was reached without reaching a terminal status.
    #[error("too many redirects (limit {0}), redirect loop suspected")]
    TooManyRedirects(usize),
}

impl ResolutionError {
    /// Category reported to HTTP clients.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolutionError::RequestFailed(_) => ErrorKind::RequestFailed,
            ResolutionError::UrlParseFailed { .. } => ErrorKind::UrlParseFailed,
            ResolutionError::TooManyRedirects(_) => ErrorKind::TooManyRedirects,
        }
    }
}

/// Error categories as they appear in the `error` field of response bodies.
///
/// `MissingParameter` and `InvalidBody` are produced by the request handler
/// before any network call; the rest map from `ResolutionError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, Display, Serialize)]
pub enum ErrorKind {
    /// No `url` given, or it was empty
    MissingParameter,
    /// POST body was not a JSON object
    InvalidBody,
    /// See [`ResolutionError::RequestFailed`]
    RequestFailed,
    /// See [`ResolutionError::UrlParseFailed`]
    #[strum(serialize = "URLParseFailed")]
    #[serde(rename = "URLParseFailed")]
    UrlParseFailed,
    /// See [`ResolutionError::TooManyRedirects`]
    TooManyRedirects,
}
