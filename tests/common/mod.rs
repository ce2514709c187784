#![allow(dead_code)]

use std::sync::Arc;

use snaplink::application::services::ShortenerService;
use snaplink::infrastructure::persistence::InMemoryEntryRepository;
use snaplink::state::AppState;

/// Base URL the test state renders short links under.
pub const BASE_URL: &str = "http://short.test";

/// Builds an `AppState` over a fresh, empty in-memory registry.
///
/// Every test gets its own registry, so tests are fully isolated and can
/// run in parallel.
pub fn create_test_state() -> AppState {
    let repository = Arc::new(InMemoryEntryRepository::new());
    let shortener = Arc::new(ShortenerService::new(repository, BASE_URL));
    AppState::new(shortener)
}

/// Seeds a link through the service layer, returning its code.
pub async fn create_test_link(state: &AppState, url: &str) -> String {
    state.shortener.shorten(url).await.unwrap().code
}
