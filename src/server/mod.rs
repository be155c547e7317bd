//! HTTP endpoint for redirect tracking.
//!
//! Provides one route, [`TRACK_REDIRECT_PATH`]:
//! - `GET ?url=...` - resolve the URL and report the full redirect chain
//! - `POST {"url": "..."}` - same, with the URL in a JSON body
//!
//! Every route answers CORS preflight requests and carries permissive CORS
//! headers.

mod handlers;
mod types;

use std::net::SocketAddr;

use anyhow::Context;
use axum::middleware;
use axum::routing::get;
use axum::Router;

use crate::config::TRACK_REDIRECT_PATH;
use handlers::{cors, track_redirect_get, track_redirect_post};
pub use types::AppState;

/// Builds the router with all routes and middleware attached.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            TRACK_REDIRECT_PATH,
            get(track_redirect_get).post(track_redirect_post),
        )
        .layer(middleware::from_fn(cors))
        .with_state(state)
}

/// Binds `addr` and serves the endpoint until Ctrl-C.
pub async fn start_server(addr: SocketAddr, state: AppState) -> Result<(), anyhow::Error> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind server to {}", addr))?;

    log::info!(
        "Redirect tracker listening on http://{}{}",
        addr,
        TRACK_REDIRECT_PATH
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Shutdown requested"),
        Err(e) => {
            // Without a signal handler the server runs until killed
            log::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
