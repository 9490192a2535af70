//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the storage and cache contracts used by the
//! link service.
//!
//! # Modules
//!
//! - [`cache`] - Redis, in-memory, and no-op caches
//! - [`persistence`] - PostgreSQL and in-memory link stores

pub mod cache;
pub mod persistence;
