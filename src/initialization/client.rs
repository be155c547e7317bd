//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the shared HTTP client used for redirect resolution.
///
/// Creates a `reqwest::Client` with redirects disabled so the redirect chain is
/// walked manually, one observable hop at a time. The timeout applies to each
/// individual HEAD or GET attempt, not to the whole chain.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_redirect_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(config.timeout())
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
