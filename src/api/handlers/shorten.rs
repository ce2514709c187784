//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page?x=1" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "Ab3xY9",
///   "long_url": "https://example.com/page?x=1",
///   "short_url": "http://localhost:3000/Ab3xY9"
/// }
/// ```
///
/// # Idempotence
///
/// Submitting the exact same URL again returns the existing code; no
/// second entry is created. Equality is literal string match — two URLs
/// differing only in a trailing slash get separate codes.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing, empty or not a valid
/// absolute URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let entry = state.shortener.shorten(&payload.url).await?;
    let short_url = state.shortener.short_url(&entry.code);

    Ok(Json(ShortenResponse {
        code: entry.code,
        long_url: entry.long_url,
        short_url,
    }))
}
