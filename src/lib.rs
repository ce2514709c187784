//! # Snaplink
//!
//! A small in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and
//!   service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory
//!   registry implementation
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Semantics
//!
//! - Codes are 6 random characters from `[A-Za-z0-9]`; collisions are
//!   retried internally and never visible to callers
//! - Shortening the exact same URL twice returns the same code
//!   (idempotent; equality is literal string match, no normalization)
//! - Deleting a code frees it for future allocation immediately
//! - Storage is process-local memory; nothing survives a restart
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional configuration
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="https://s.example.com"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library
/// users and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::Entry;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryEntryRepository;
    pub use crate::state::AppState;
}
