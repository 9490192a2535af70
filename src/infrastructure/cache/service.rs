//! Cache service trait and error types.

use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Best-effort slug to URL cache.
///
/// The cache may be empty, stale, or unreachable at any time. Callers treat
/// any error as a miss and never depend on a write having landed.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::InMemoryCache`] - Bounded process-local cache
/// - [`crate::infrastructure::cache::NullCache`] - Always misses
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the URL cached under a slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend could not be queried.
    async fn get_url(&self, slug: &str) -> CacheResult<Option<String>>;

    /// Stores a slug to URL mapping.
    ///
    /// `ttl_seconds` of `None` uses the implementation default.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the write was rejected or the backend is down.
    async fn set_url(&self, slug: &str, url: &str, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;
}
