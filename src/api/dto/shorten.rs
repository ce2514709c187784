//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be a valid absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Response for a successfully shortened URL.
///
/// Shortening an already-known URL returns the existing code, so this
/// response is identical whether the entry was just created or reused.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub long_url: String,
    pub short_url: String,
}
