//! Durable store implementations.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - PostgreSQL link storage via SQLx
//! - [`InMemoryLinkRepository`] - In-process store (counter + DashMap)

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
