//! Handlers for link management endpoints (list, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::links::{LinkItem, LinkListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every current short link.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Response
///
/// ```json
/// {
///   "count": 2,
///   "links": [
///     {
///       "code": "Ab3xY9",
///       "long_url": "https://example.com",
///       "short_url": "http://localhost:3000/Ab3xY9"
///     }
///   ]
/// }
/// ```
///
/// Link order is unspecified.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<LinkListResponse>, AppError> {
    let entries = state.shortener.list().await?;

    let links: Vec<LinkItem> = entries
        .into_iter()
        .map(|entry| {
            let short_url = state.shortener.short_url(&entry.code);
            LinkItem {
                code: entry.code,
                long_url: entry.long_url,
                short_url,
            }
        })
        .collect();

    Ok(Json(LinkListResponse {
        count: links.len(),
        links,
    }))
}

/// Deletes a short link by its code.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// The code becomes immediately reusable for future shortens; there is
/// no tombstoning.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.shortener.delete(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
