//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. The service
//! holds exactly one entity: the [`Entry`] mapping between a short code
//! and the original URL.

pub mod entry;

pub use entry::Entry;
