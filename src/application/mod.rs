//! Application layer services implementing business logic.
//!
//! Services consume the repository and cache traits and give HTTP handlers a
//! narrow API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Slug minting and cache-aside resolution

pub mod services;
