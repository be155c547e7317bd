//! HTTP redirect chain resolution.
//!
//! This module follows redirect chains manually to track the full path from
//! the initial URL to its final destination.
//!
//! Two entry points share one loop:
//! - [`RedirectResolver::resolve_final_url`] returns only the final URL and,
//!   when the hop limit is hit, still answers with the last URL reached.
//! - [`RedirectResolver::resolve_with_details`] returns the whole chain and
//!   reports hitting the hop limit as [`ResolutionError::TooManyRedirects`].
//!
//! The two modes deliberately disagree on the hop-limit case; callers of the
//! simple API have always received a URL there.

use std::sync::Arc;

use reqwest::Url;

use super::{Fetcher, ReqwestFetcher};
use crate::config::Config;
use crate::error_handling::{InitializationError, ResolutionError};
use crate::models::ResolutionResult;

/// Walks redirect chains through a [`Fetcher`].
///
/// Cheap to clone; holds no per-request state.
#[derive(Clone)]
pub struct RedirectResolver {
    fetcher: Arc<dyn Fetcher>,
    max_redirects: usize,
}

/// Position in the chain. Replaced, never shared, on every hop.
#[derive(Debug)]
struct Cursor {
    current_url: String,
    redirect_count: usize,
    chain: Vec<String>,
}

impl Cursor {
    fn start(url: &str) -> Self {
        Cursor {
            current_url: url.to_string(),
            redirect_count: 0,
            chain: vec![url.to_string()],
        }
    }

    fn advance(mut self, next_url: String) -> Self {
        self.chain.push(next_url.clone());
        Cursor {
            current_url: next_url,
            redirect_count: self.redirect_count + 1,
            chain: self.chain,
        }
    }
}

/// How the loop ended when no error occurred.
#[derive(Debug)]
enum Walk {
    /// A terminal status was reached.
    Resolved(Cursor),
    /// The hop limit was reached first.
    Overflow(Cursor),
}

impl RedirectResolver {
    /// Creates a resolver over any transport.
    pub fn new(fetcher: Arc<dyn Fetcher>, max_redirects: usize) -> Self {
        RedirectResolver {
            fetcher,
            max_redirects,
        }
    }

    /// Creates a resolver backed by a fresh reqwest client built from `config`.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let fetcher = ReqwestFetcher::from_config(config)?;
        Ok(Self::new(Arc::new(fetcher), config.max_redirects))
    }

    /// Maximum number of hops followed before giving up.
    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    /// Resolves `url` and returns only the final URL.
    ///
    /// Hitting the hop limit is not an error here: the last URL reached is
    /// returned instead.
    ///
    /// # Errors
    ///
    /// `RequestFailed` if a hop could not be fetched, `UrlParseFailed` if a
    /// redirect target could not be resolved.
    pub async fn resolve_final_url(&self, url: &str) -> Result<String, ResolutionError> {
        match self.walk(url).await? {
            Walk::Resolved(cursor) => Ok(cursor.current_url),
            Walk::Overflow(cursor) => {
                log::warn!(
                    "Stopped after {} redirects for {}, returning {}",
                    cursor.redirect_count,
                    url,
                    cursor.current_url
                );
                Ok(cursor.current_url)
            }
        }
    }

    /// Resolves `url` and returns the full redirect chain.
    ///
    /// # Errors
    ///
    /// Same as [`resolve_final_url`](Self::resolve_final_url), plus
    /// `TooManyRedirects` when the hop limit is reached. No partial chain is
    /// returned in that case.
    pub async fn resolve_with_details(
        &self,
        url: &str,
    ) -> Result<ResolutionResult, ResolutionError> {
        match self.walk(url).await? {
            Walk::Resolved(cursor) => Ok(ResolutionResult {
                original_url: url.to_string(),
                final_url: cursor.current_url,
                redirect_count: cursor.redirect_count,
                redirect_chain: cursor.chain,
            }),
            Walk::Overflow(cursor) => {
                log::warn!(
                    "Too many redirects for {} (stopped at {})",
                    url,
                    cursor.current_url
                );
                Err(ResolutionError::TooManyRedirects(self.max_redirects))
            }
        }
    }

    async fn walk(&self, start_url: &str) -> Result<Walk, ResolutionError> {
        let mut cursor = Cursor::start(start_url);

        while cursor.redirect_count < self.max_redirects {
            let hop = self.fetcher.fetch(&cursor.current_url).await?;

            let location = match hop.next_location() {
                Some(location) => location,
                None => {
                    if hop.is_redirect() {
                        log::debug!(
                            "Redirect status {} for {} but no Location header",
                            hop.status,
                            cursor.current_url
                        );
                    }
                    return Ok(Walk::Resolved(cursor));
                }
            };

            let next_url = resolve_location(&cursor.current_url, location)?;
            cursor = cursor.advance(next_url);
            log::debug!(
                "Redirect {} ({}): {}",
                cursor.redirect_count,
                hop.status,
                cursor.current_url
            );
        }

        Ok(Walk::Overflow(cursor))
    }
}

/// Resolves a `Location` value against the URL that returned it.
///
/// Absolute locations replace the base entirely; relative ones are merged
/// with the base's scheme, authority and path (RFC 3986 §5.3).
///
/// # Errors
///
/// `UrlParseFailed` if either the base or the location does not parse.
pub fn resolve_location(base: &str, location: &str) -> Result<String, ResolutionError> {
    let base_url = Url::parse(base).map_err(|source| ResolutionError::UrlParseFailed {
        context: "URL",
        input: base.to_string(),
        source,
    })?;
    let target = base_url
        .join(location)
        .map_err(|source| ResolutionError::UrlParseFailed {
            context: "redirect URL",
            input: location.to_string(),
            source,
        })?;
    Ok(target.into())
}
