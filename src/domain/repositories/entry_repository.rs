//! Repository trait for the short link registry.

use crate::domain::entities::Entry;
use crate::error::AppError;
use async_trait::async_trait;

/// Registry interface owning the code ↔ URL mapping and its invariants.
///
/// Implementations must make each operation atomic with respect to the
/// others: in particular, the duplicate-URL check and the
/// collision-check-then-insert inside [`create_or_get`] have to observe a
/// consistent snapshot of all keys, so that two concurrent calls can
/// neither allocate the same code twice nor create two entries for the
/// same URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryEntryRepository`] -
///   process-local in-memory registry
/// - Test mocks available with `cfg(test)`
///
/// [`create_or_get`]: EntryRepository::create_or_get
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Returns the existing entry for `long_url`, or allocates a fresh
    /// code and inserts a new one.
    ///
    /// URL equality is exact string match — no normalization of casing,
    /// trailing slashes or query order. Repeated calls with an identical
    /// URL are idempotent and return the same entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no free code can be found within
    /// the retry bound (astronomically unlikely given the 62^6 keyspace).
    async fn create_or_get(&self, long_url: &str) -> Result<Entry, AppError>;

    /// Finds an entry by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Entry))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Entry>, AppError>;

    /// Lists all current entries.
    ///
    /// Iteration order is unspecified and not stable across calls;
    /// callers must not rely on it.
    async fn list(&self) -> Result<Vec<Entry>, AppError>;

    /// Removes the entry for `code`.
    ///
    /// Returns `Ok(true)` if the entry existed and was removed,
    /// `Ok(false)` if not found. A removed code is immediately free for
    /// future allocation.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Counts entries currently in the registry.
    async fn count(&self) -> Result<usize, AppError>;
}
