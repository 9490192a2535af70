//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::codec;
use crate::infrastructure::cache::{CacheService, InMemoryCache, NullCache, RedisCache};
use crate::infrastructure::persistence::PgLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Slug codec lookup table
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Redis cache, or the in-process cache when Redis is absent or unreachable
/// - Axum HTTP server, stopped by Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    codec::init();

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let cache = connect_cache(&config).await;
    let repository = Arc::new(PgLinkRepository::new(Arc::new(pool)));

    let state = AppState::new(repository, cache);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Selects the cache backend.
///
/// Redis when configured and reachable, otherwise the in-process cache, or
/// [`NullCache`] when caching is disabled altogether.
async fn connect_cache(config: &Config) -> Arc<dyn CacheService> {
    if !config.is_cache_enabled() {
        tracing::info!("Cache disabled (NullCache)");
        return Arc::new(NullCache::new());
    }

    if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                return Arc::new(redis);
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using in-process cache.", e);
            }
        }
    }

    local_cache(config)
}

fn local_cache(config: &Config) -> Arc<dyn CacheService> {
    if config.cache_max_entries == 0 {
        tracing::info!("Cache disabled (NullCache)");
        return Arc::new(NullCache::new());
    }

    tracing::info!(
        max_entries = config.cache_max_entries,
        "Cache enabled (in-process)"
    );
    Arc::new(InMemoryCache::with_ttl(
        config.cache_max_entries,
        Duration::from_secs(config.cache_ttl_seconds),
    ))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(redis_url: Option<&str>, cache_max_entries: u64) -> Config {
        Config {
            database_url: "postgres://localhost/test".to_string(),
            redis_url: redis_url.map(str::to_string),
            listen_addr: "127.0.0.1:0".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            cache_ttl_seconds: 3600,
            cache_max_entries,
            db_max_connections: 1,
            db_connect_timeout: 1,
        }
    }

    async fn remembers(cache: &dyn CacheService) -> bool {
        cache.set_url("go", "https://example.com", None).await.is_ok()
            && cache.get_url("go").await.ok().flatten().is_some()
    }

    #[tokio::test]
    async fn test_in_process_cache_without_redis() {
        let cache = connect_cache(&config(None, 16)).await;
        assert!(remembers(cache.as_ref()).await);
    }

    #[tokio::test]
    async fn test_cache_disabled() {
        let cache = connect_cache(&config(None, 0)).await;
        assert!(!remembers(cache.as_ref()).await);
    }
}
