//! In-memory implementation of the entry repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::Entry;
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Maximum code draws per allocation before giving up.
///
/// With a 62^6 keyspace a second draw is already rare; hitting this bound
/// means the generator is broken or the registry is absurdly full.
const MAX_ATTEMPTS: usize = 10;

type CodeFn = Box<dyn Fn() -> String + Send + Sync>;

/// Process-local registry backed by a `HashMap` behind a single `RwLock`.
///
/// One lock guards the whole map rather than individual keys: the
/// duplicate-URL scan and the collision-check-then-insert in
/// [`create_or_get`] need a consistent snapshot of every key, and the
/// critical sections are short O(1)/O(n) in-memory operations. Reads
/// (lookup, list, count) share the read lock and run in parallel.
///
/// State lives exactly as long as the process; nothing is persisted.
///
/// [`create_or_get`]: EntryRepository::create_or_get
pub struct InMemoryEntryRepository {
    entries: RwLock<HashMap<String, String>>,
    generate: CodeFn,
}

impl InMemoryEntryRepository {
    /// Creates an empty registry using the random code generator.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            generate: Box::new(generate_code),
        }
    }

    /// Creates a registry with a custom code source, used by tests to
    /// force collisions and exhaustion deterministically.
    #[cfg(test)]
    fn with_generator(generate: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            generate: Box::new(generate),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, String>>, AppError> {
        self.entries
            .read()
            .map_err(|_| AppError::internal("Registry lock poisoned", json!({})))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, String>>, AppError> {
        self.entries
            .write()
            .map_err(|_| AppError::internal("Registry lock poisoned", json!({})))
    }
}

impl Default for InMemoryEntryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn create_or_get(&self, long_url: &str) -> Result<Entry, AppError> {
        let mut entries = self.write()?;

        // Idempotence: exact string match against current targets. Linear
        // scan over live entries, acceptable at this registry's scale.
        if let Some((code, _)) = entries.iter().find(|(_, url)| url.as_str() == long_url) {
            return Ok(Entry::new(code.clone(), long_url));
        }

        for _ in 0..MAX_ATTEMPTS {
            let code = (self.generate)();

            if !entries.contains_key(&code) {
                entries.insert(code.clone(), long_url.to_owned());
                return Ok(Entry::new(code, long_url));
            }
        }

        Err(AppError::internal(
            "Could not allocate a free short code",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Entry>, AppError> {
        let entries = self.read()?;

        Ok(entries
            .get(code)
            .map(|long_url| Entry::new(code, long_url.clone())))
    }

    async fn list(&self) -> Result<Vec<Entry>, AppError> {
        let entries = self.read()?;

        Ok(entries
            .iter()
            .map(|(code, long_url)| Entry::new(code.clone(), long_url.clone()))
            .collect())
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let mut entries = self.write()?;

        Ok(entries.remove(code).is_some())
    }

    async fn count(&self) -> Result<usize, AppError> {
        let entries = self.read()?;

        Ok(entries.len())
    }
}
