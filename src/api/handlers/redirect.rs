//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Resolution is a pure read against the registry; the handler never
/// mutates state.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist. Codes of the
/// wrong shape simply miss the lookup and fall into the same 404 path.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let entry = state.shortener.resolve(&code).await?;

    debug!(code = %code, target = %entry.long_url, "redirecting");

    Ok(Redirect::temporary(&entry.long_url))
}
