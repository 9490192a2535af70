//! Domain layer containing entities, the slug codec, and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`codec`] - Base62 identifier/slug transform
//! - [`repositories`] - Durable store trait definitions
//! - [`error`] - Codec, storage, and service error types
//!
//! Nothing here depends on the HTTP layer or on a concrete store or cache.
//! [`error::StorageError`] wraps `sqlx::Error` so the PostgreSQL adapter can
//! propagate driver errors with `?`.
//! Resolution and creation flows live in [`crate::application::services`].

pub mod codec;
pub mod entities;
pub mod error;
pub mod repositories;
