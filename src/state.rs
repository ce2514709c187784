//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;

/// State shared by every handler.
///
/// Constructed once at startup in [`crate::server::run`] and cloned into
/// each request; the registry behind the service carries its own
/// synchronization, so no further locking happens at this level.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>) -> Self {
        Self { shortener }
    }
}
