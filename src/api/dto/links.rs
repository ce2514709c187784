//! DTOs for link listing.

use serde::Serialize;

/// A single link in the listing.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub code: String,
    pub long_url: String,
    pub short_url: String,
}

/// Response containing every current link.
///
/// `links` carries the registry's iteration order, which is unspecified;
/// clients must not attach meaning to it.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub count: usize,
    pub links: Vec<LinkItem>,
}
