//! Shortening, resolution and removal of short links.

use std::sync::Arc;

use serde_json::json;
use url::Url;

use crate::domain::entities::Entry;
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;

/// Service in front of the registry.
///
/// Validates incoming URLs, delegates mapping operations to the
/// repository and renders full short URLs from the configured base URL.
/// URLs are passed to the registry exactly as received; deduplication is
/// literal string equality by design.
pub struct ShortenerService {
    repository: Arc<dyn EntryRepository>,
    base_url: String,
}

impl ShortenerService {
    /// Creates a new shortener service.
    ///
    /// `base_url` is the public prefix short URLs are rendered under,
    /// e.g. `https://s.example.com`.
    pub fn new(repository: Arc<dyn EntryRepository>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
        }
    }

    /// Shortens a URL, returning the existing entry when the exact same
    /// URL was shortened before.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is empty or not an
    /// absolute URI with a scheme and host. Reachability of the target is
    /// never checked.
    pub async fn shorten(&self, long_url: &str) -> Result<Entry, AppError> {
        Self::validate_target(long_url)?;

        let entry = self.repository.create_or_get(long_url).await?;
        tracing::debug!(code = %entry.code, "short link ready");

        Ok(entry)
    }

    /// Resolves a short code to its entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry exists for `code`; the
    /// caller decides the fallback behavior.
    pub async fn resolve(&self, code: &str) -> Result<Entry, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Lists all current entries. Order is unspecified.
    pub async fn list(&self) -> Result<Vec<Entry>, AppError> {
        self.repository.list().await
    }

    /// Deletes the entry for `code`, freeing the code for reuse.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry exists for `code`.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        if self.repository.delete(code).await? {
            tracing::debug!(code, "short link deleted");
            Ok(())
        } else {
            Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ))
        }
    }

    /// Number of entries currently in the registry.
    pub async fn entry_count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Checks that the target is a non-empty absolute URI with a scheme
    /// and an authority.
    fn validate_target(long_url: &str) -> Result<(), AppError> {
        if long_url.is_empty() {
            return Err(AppError::bad_request("URL is required", json!({})));
        }

        let parsed = Url::parse(long_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        if !parsed.has_host() {
            return Err(AppError::bad_request(
                "URL must have a scheme and host",
                json!({ "url": long_url }),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockEntryRepository;

    fn service(repo: MockEntryRepository) -> ShortenerService {
        ShortenerService::new(Arc::new(repo), "https://s.example.com")
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut repo = MockEntryRepository::new();
        repo.expect_create_or_get()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|url| Ok(Entry::new("Ab3xY9", url)));

        let result = service(repo).shorten("https://example.com").await;

        let entry = result.unwrap();
        assert_eq!(entry.code, "Ab3xY9");
        assert_eq!(entry.long_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_shorten_passes_url_through_verbatim() {
        let mut repo = MockEntryRepository::new();
        repo.expect_create_or_get()
            .withf(|url| url == "HTTPS://Example.COM:443/Path#frag")
            .times(1)
            .returning(|url| Ok(Entry::new("Ab3xY9", url)));

        // No normalization: scheme case, default port and fragment all
        // reach the registry untouched.
        let result = service(repo).shorten("HTTPS://Example.COM:443/Path#frag").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_empty_url() {
        let repo = MockEntryRepository::new();

        let err = service(repo).shorten("").await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_shorten_relative_url() {
        let repo = MockEntryRepository::new();

        let err = service(repo).shorten("not a url").await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_shorten_url_without_host() {
        let repo = MockEntryRepository::new();

        let err = service(repo)
            .shorten("mailto:user@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_shorten_url_with_query() {
        let mut repo = MockEntryRepository::new();
        repo.expect_create_or_get()
            .times(1)
            .returning(|url| Ok(Entry::new("Qq7Zt0", url)));

        let entry = service(repo)
            .shorten("https://example.com/page?x=1")
            .await
            .unwrap();

        assert_eq!(entry.long_url, "https://example.com/page?x=1");
    }

    #[tokio::test]
    async fn test_resolve_existing() {
        let mut repo = MockEntryRepository::new();
        repo.expect_find_by_code()
            .withf(|code| code == "Ab3xY9")
            .times(1)
            .returning(|code| Ok(Some(Entry::new(code, "https://example.com"))));

        let entry = service(repo).resolve("Ab3xY9").await.unwrap();
        assert_eq!(entry.long_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_nonexistent() {
        let mut repo = MockEntryRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));

        let err = service(repo).resolve("nope42").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let mut repo = MockEntryRepository::new();
        repo.expect_delete()
            .withf(|code| code == "Ab3xY9")
            .times(1)
            .returning(|_| Ok(true));

        assert!(service(repo).delete("Ab3xY9").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_nonexistent() {
        let mut repo = MockEntryRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(false));

        let err = service(repo).delete("nope42").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_delegates_to_repository() {
        let mut repo = MockEntryRepository::new();
        repo.expect_list().times(1).returning(|| {
            Ok(vec![
                Entry::new("code01", "https://one.example"),
                Entry::new("code02", "https://two.example"),
            ])
        });

        let entries = service(repo).list().await.unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let service =
            ShortenerService::new(Arc::new(MockEntryRepository::new()), "https://s.example.com/");

        assert_eq!(service.short_url("Ab3xY9"), "https://s.example.com/Ab3xY9");
    }
}
