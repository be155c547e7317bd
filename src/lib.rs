//! redirect_tracker library: find out where a URL really leads
//!
//! Follows HTTP redirects one hop at a time (HEAD, falling back to GET),
//! resolving relative `Location` headers against the URL that returned them
//! and stopping after a fixed number of hops. Results are available as a
//! plain final URL or as the full redirect chain, and through an HTTP
//! endpoint.
//!
//! # Example
//!
//! ```no_run
//! use redirect_tracker::{Config, RedirectResolver};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = RedirectResolver::from_config(&Config::default())?;
//!
//! let result = resolver.resolve_with_details("http://example.com/a").await?;
//! println!(
//!     "{} -> {} in {} redirects",
//!     result.original_url, result.final_url, result.redirect_count
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
mod server;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ErrorKind, InitializationError, ResolutionError};
pub use fetch::{resolve_location, Fetcher, HopResponse, RedirectResolver, ReqwestFetcher};
pub use models::ResolutionResult;
pub use server::{build_router, start_server, AppState};
pub use utils::unescape_unicode;
