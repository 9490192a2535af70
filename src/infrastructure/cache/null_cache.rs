//! No-op cache used when caching is disabled.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use tracing::debug;

/// A cache that never holds anything.
///
/// Every lookup misses and every write is discarded, so all reads fall
/// through to the durable store. Selected when Redis is not configured or
/// could not be reached at startup.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_url(&self, _slug: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set_url(&self, _slug: &str, _url: &str, _ttl_seconds: Option<u64>) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
