//! Data access trait definitions.
//!
//! Repository traits define the contracts implemented by the
//! infrastructure layer. The domain layer itself has no dependency on
//! any concrete storage.

pub mod entry_repository;

pub use entry_repository::EntryRepository;

#[cfg(test)]
pub use entry_repository::MockEntryRepository;
