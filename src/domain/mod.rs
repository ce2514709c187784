//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - The domain layer has no dependencies on infrastructure or
//!   presentation layers
//! - Repository traits define contracts implemented by the
//!   infrastructure layer
//! - Business logic lives in services (see
//!   [`crate::application::services`])

pub mod entities;
pub mod repositories;
