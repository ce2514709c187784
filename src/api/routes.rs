//! API route configuration.

use crate::api::handlers::{delete_link_handler, list_links_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All `/api` routes.
///
/// # Endpoints
///
/// - `POST   /shorten`       - Create (or return the existing) short link
/// - `GET    /links`         - List all short links
/// - `DELETE /links/{code}`  - Delete a short link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links", get(list_links_handler))
        .route("/links/{code}", delete(delete_link_handler))
}
