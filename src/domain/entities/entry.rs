//! Entry entity representing a shortened URL mapping.

use serde::Serialize;

/// A single code → URL mapping held by the registry.
///
/// Entries are immutable once created: the URL a code points to never
/// changes in place. An entry disappears only through an explicit delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// The short identifier, exactly 6 characters from `[A-Za-z0-9]`.
    pub code: String,
    /// The original URL, stored exactly as supplied (no normalization).
    pub long_url: String,
}

impl Entry {
    /// Creates a new Entry instance.
    pub fn new(code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            long_url: long_url.into(),
        }
    }
}
