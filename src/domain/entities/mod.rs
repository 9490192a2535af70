//! Core domain entities.
//!
//! - [`Link`] - A URL and the slug it is reachable under

pub mod link;

pub use link::Link;
