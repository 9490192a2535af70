//! Repository trait for the durable link store.

use crate::domain::error::StorageError;
use async_trait::async_trait;

/// Durable store of link identifiers and their URLs.
///
/// Identifiers are assigned by the store, in assignment order, and are never
/// reused. Concurrent inserts must never observe the same identifier.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a URL and returns its freshly assigned identifier.
    ///
    /// Submitting the same URL twice stores two rows with distinct identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the row could not be written.
    async fn insert(&self, url: &str) -> Result<i64, StorageError>;

    /// Looks up the URL stored under an identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if found
    /// - `Ok(None)` if no row has this identifier
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on connectivity or query failures.
    async fn find_url(&self, id: i64) -> Result<Option<String>, StorageError>;

    /// Verifies the store is reachable.
    async fn ping(&self) -> Result<(), StorageError>;
}
