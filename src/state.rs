//! Shared state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{RedirectService, ShortenerService};
use crate::infrastructure::persistence::InMemoryEntryRepository;

/// State cloned into every request handler.
///
/// Services hold the single repository instance; nothing here is global.
#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService<InMemoryEntryRepository>>,
    pub redirect_service: Arc<RedirectService<InMemoryEntryRepository>>,
    /// Public prefix for composed short links, without trailing slash.
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(
        shortener_service: Arc<ShortenerService<InMemoryEntryRepository>>,
        redirect_service: Arc<RedirectService<InMemoryEntryRepository>>,
        base_url: &str,
    ) -> Self {
        Self {
            shortener_service,
            redirect_service,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }
}
