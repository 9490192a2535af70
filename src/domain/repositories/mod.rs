//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for durable storage; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! See `tests/repository_link.rs` for usage against PostgreSQL.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
