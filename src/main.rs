//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `redirect_tracker` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Dispatch to the HTTP server or a one-shot resolution
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use redirect_tracker::config::{Command, Opt};
use redirect_tracker::initialization::init_logger_with;
use redirect_tracker::{start_server, AppState, RedirectResolver};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = opt.config();
    let resolver =
        RedirectResolver::from_config(&config).context("Failed to initialize HTTP client")?;

    match opt.command {
        Command::Serve { listen } => start_server(listen, AppState::new(resolver)).await,
        Command::Resolve { url, simple } => match resolve(&resolver, &url, simple).await {
            Ok(output) => {
                println!("{}", output);
                Ok(())
            }
            Err(e) => {
                eprintln!("redirect_tracker error: {:#}", e);
                process::exit(1);
            }
        },
    }
}

async fn resolve(resolver: &RedirectResolver, url: &str, simple: bool) -> Result<String> {
    if simple {
        return Ok(resolver.resolve_final_url(url).await?);
    }
    let result = resolver.resolve_with_details(url).await?;
    serde_json::to_string_pretty(&result).context("Failed to serialize result")
}
