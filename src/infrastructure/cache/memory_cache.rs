//! Process-local cache backed by Moka.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Default number of slugs held before eviction.
pub const DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Default lifetime of an entry written without an explicit TTL.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone)]
struct CachedUrl {
    url: String,
    ttl: Duration,
}

/// Expires each entry after the TTL it was written with.
struct PerEntryTtl;

impl Expiry<String, CachedUrl> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedUrl,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedUrl,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// In-memory slug cache.
///
/// Bounded by entry count; the least valuable entries are evicted once the
/// bound is reached. Each entry lives for the TTL passed to
/// [`CacheService::set_url`], or for the cache's default TTL when none is given.
#[derive(Clone)]
pub struct InMemoryCache {
    cache: Cache<String, CachedUrl>,
    default_ttl: Duration,
}

impl InMemoryCache {
    /// Creates a cache holding up to [`DEFAULT_MAX_ENTRIES`] slugs for [`DEFAULT_TTL`].
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_MAX_ENTRIES, DEFAULT_TTL)
    }

    /// Creates a cache with a custom capacity and default TTL.
    pub fn with_ttl(max_capacity: u64, default_ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self { cache, default_ttl }
    }

    /// Number of live entries, after pending evictions have been applied.
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for InMemoryCache {
    async fn get_url(&self, slug: &str) -> CacheResult<Option<String>> {
        let url = self.cache.get(slug).await.map(|entry| entry.url);
        debug!(slug, hit = url.is_some(), "In-memory cache lookup");
        Ok(url)
    }

    async fn set_url(&self, slug: &str, url: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let ttl = ttl_seconds.map_or(self.default_ttl, Duration::from_secs);

        self.cache
            .insert(
                slug.to_string(),
                CachedUrl {
                    url: url.to_string(),
                    ttl,
                },
            )
            .await;

        trace!(slug, ttl_secs = ttl.as_secs(), "Cached URL in memory");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = InMemoryCache::new();
        assert_eq!(cache.entry_count().await, 0);

        cache.set_url("go", "https://example.com", Some(60)).await.unwrap();

        assert_eq!(
            cache.get_url("go").await.unwrap().as_deref(),
            Some("https://example.com")
        );
        assert_eq!(cache.get_url("missing").await.unwrap(), None);
        assert_eq!(cache.entry_count().await, 1);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let cache = InMemoryCache::new();

        cache.set_url("go", "https://old.example.com", None).await.unwrap();
        cache.set_url("go", "https://new.example.com", None).await.unwrap();

        assert_eq!(
            cache.get_url("go").await.unwrap().as_deref(),
            Some("https://new.example.com")
        );
    }

    #[tokio::test]
    async fn test_default_ttl_expires_entries() {
        let cache = InMemoryCache::with_ttl(100, Duration::from_millis(50));

        cache.set_url("go", "https://example.com", None).await.unwrap();
        assert!(cache.get_url("go").await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(cache.get_url("go").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_explicit_ttl_overrides_default() {
        let cache = InMemoryCache::with_ttl(100, Duration::from_millis(50));

        cache.set_url("go", "https://example.com", Some(3600)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(
            cache.get_url("go").await.unwrap().as_deref(),
            Some("https://example.com")
        );
    }

    #[tokio::test]
    async fn test_capacity_is_bounded() {
        let cache = InMemoryCache::with_ttl(4, DEFAULT_TTL);

        for id in 0..64 {
            let slug = format!("slug{id}");
            cache.set_url(&slug, "https://example.com", None).await.unwrap();
        }

        assert!(cache.entry_count().await <= 4);
    }

    #[tokio::test]
    async fn test_health_check() {
        assert!(InMemoryCache::new().health_check().await);
    }
}
