//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_LISTEN_ADDR, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS, REQUEST_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Everything here is read-only once the client is built; it is the only
/// state shared between concurrent resolutions.
///
/// # Examples
///
/// ```no_run
/// use redirect_tracker::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Per-request timeout in seconds (each HEAD and GET attempt)
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value for outbound requests
    pub user_agent: String,

    /// Maximum number of redirect hops before the chain is treated as a loop
    pub max_redirects: usize,
}

impl Config {
    /// Per-request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_seconds: REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: MAX_REDIRECT_HOPS,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Run the HTTP endpoint
/// redirect_tracker serve --listen 0.0.0.0:8080
///
/// # Resolve a single URL and print the chain
/// redirect_tracker resolve https://bit.ly/example
///
/// # Print only the final URL
/// redirect_tracker resolve https://bit.ly/example --simple
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "redirect_tracker",
    version,
    about = "Follows HTTP redirects hop by hop and reports where a URL really leads."
)]
pub struct Opt {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(
        long,
        default_value_t = REQUEST_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,

    /// Maximum redirect hops to follow before giving up
    #[arg(
        long,
        default_value_t = MAX_REDIRECT_HOPS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..),
        global = true
    )]
    pub max_redirects: usize,

    /// What to run
    #[command(subcommand)]
    pub command: Command,
}

impl Opt {
    /// Builds the library configuration from the parsed options.
    pub fn config(&self) -> Config {
        Config {
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            max_redirects: self.max_redirects,
        }
    }
}

/// Subcommands of the binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the redirect tracking HTTP endpoint
    Serve {
        /// Socket address to listen on
        #[arg(long, default_value = DEFAULT_LISTEN_ADDR)]
        listen: SocketAddr,
    },
    /// Resolve one URL and print the result as JSON
    Resolve {
        /// URL to resolve
        url: String,

        /// Print only the final URL
        #[arg(long)]
        simple: bool,
    },
}
