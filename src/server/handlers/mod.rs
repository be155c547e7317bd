//! HTTP handlers and middleware.

mod cors;
mod track;

pub use cors::cors;
pub use track::{track_redirect_get, track_redirect_post};
