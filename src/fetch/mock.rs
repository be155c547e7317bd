// Scripted in-memory transport for resolver and handler tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Fetcher, HopResponse};
use crate::error_handling::ResolutionError;

/// Answers each URL from a fixed table and counts calls.
/// URLs missing from the table fail like an unreachable host.
#[derive(Default)]
pub(crate) struct ScriptedFetcher {
    routes: HashMap<String, HopResponse>,
    calls: AtomicUsize,
    visited: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(mut self, url: &str, status: u16) -> Self {
        self.routes.insert(
            url.to_string(),
            HopResponse {
                status,
                location: None,
            },
        );
        self
    }

    pub(crate) fn redirect(mut self, url: &str, status: u16, location: &str) -> Self {
        self.routes.insert(
            url.to_string(),
            HopResponse {
                status,
                location: Some(location.to_string()),
            },
        );
        self
    }

    /// `url_for(0) -> url_for(1) -> ... -> url_for(hops)`, the last one answering 200.
    pub(crate) fn chain(mut self, hops: usize, url_for: impl Fn(usize) -> String) -> Self {
        for i in 0..hops {
            self = self.redirect(&url_for(i), 302, &url_for(i + 1));
        }
        self.respond(&url_for(hops), 200)
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str) -> Result<HopResponse, ResolutionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.visited.lock().unwrap().push(url.to_string());
        self.routes.get(url).cloned().ok_or_else(|| {
            ResolutionError::RequestFailed(format!("error sending request for url ({})", url))
        })
    }
}
