//! Outbound HTTP: one hop at a time.
//!
//! The [`Fetcher`] trait is the seam between the redirect resolver and the
//! network. [`ReqwestFetcher`] is the production implementation; it never
//! follows redirects itself, so every 3xx response and its `Location` header
//! reach the resolver untouched.

mod redirects;

#[cfg(test)]
pub(crate) mod mock;

use std::error::Error as StdError;
use std::fmt::Display;
use std::future::Future;

use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::Method;

use crate::config::Config;
use crate::error_handling::{InitializationError, ResolutionError};
use crate::initialization::init_redirect_client;

pub use redirects::{resolve_location, RedirectResolver};

/// Status line and redirect target of a single hop.
///
/// Only what the resolver needs is copied out of the response; the response
/// itself never leaves the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw `Location` header value, if present
    pub location: Option<String>,
}

impl HopResponse {
    /// Whether the status is in the 3xx range.
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }

    /// The redirect target to follow, or `None` when this hop is terminal.
    ///
    /// A hop is terminal when its status is outside [300, 400) or when it is a
    /// redirect with a missing or empty `Location` header.
    pub fn next_location(&self) -> Option<&str> {
        if !self.is_redirect() {
            return None;
        }
        self.location.as_deref().filter(|loc| !loc.is_empty())
    }

    fn from_response(resp: &reqwest::Response) -> Self {
        HopResponse {
            status: resp.status().as_u16(),
            location: resp
                .headers()
                .get(LOCATION)
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned()),
        }
    }
}

/// Performs a single outbound request for the redirect resolver.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Requests `url` once (with whatever fallback the implementation has) and
    /// reports the status and `Location` header without following redirects.
    async fn fetch(&self, url: &str) -> Result<HopResponse, ResolutionError>;
}

/// `Fetcher` backed by a `reqwest::Client` with redirects disabled.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Wraps an existing client. The client must have redirects disabled.
    pub fn new(client: reqwest::Client) -> Self {
        ReqwestFetcher { client }
    }

    /// Builds the client from configuration (timeout, User-Agent).
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::new(init_redirect_client(config)?))
    }

    async fn attempt(&self, method: Method, url: &str) -> Result<HopResponse, reqwest::Error> {
        let resp = self.client.request(method, url).send().await?;
        Ok(HopResponse::from_response(&resp))
        // resp dropped here: the connection and any unread body are released
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<HopResponse, ResolutionError> {
        head_then_get(|method| self.attempt(method, url), url).await
    }
}

/// Runs `attempt` with HEAD, and once more with GET if HEAD failed at the
/// transport level. A HEAD that gets any HTTP response, whatever its status,
/// is final.
pub(crate) async fn head_then_get<F, Fut, E>(
    mut attempt: F,
    url: &str,
) -> Result<HopResponse, ResolutionError>
where
    F: FnMut(Method) -> Fut,
    Fut: Future<Output = Result<HopResponse, E>>,
    E: StdError,
{
    match attempt(Method::HEAD).await {
        Ok(hop) => Ok(hop),
        Err(head_err) => {
            log::debug!("HEAD {} failed, retrying with GET: {}", url, head_err);
            attempt(Method::GET).await.map_err(|get_err| {
                ResolutionError::RequestFailed(error_chain_message(&get_err))
            })
        }
    }
}

/// Joins an error with its sources, e.g. "error sending request: connection refused".
fn error_chain_message(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        push_cause(&mut message, cause);
        source = cause.source();
    }
    message
}

fn push_cause(message: &mut String, cause: impl Display) {
    let cause = cause.to_string();
    // reqwest and hyper often repeat the inner message in the outer one
    if !message.contains(&cause) {
        message.push_str(": ");
        message.push_str(&cause);
    }
}
