#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use slugline::domain::error::StorageError;
use slugline::domain::repositories::LinkRepository;
use slugline::infrastructure::cache::{CacheService, InMemoryCache, NullCache};
use slugline::infrastructure::persistence::InMemoryLinkRepository;
use slugline::routes::app_router;
use slugline::state::AppState;

/// A store that rejects every operation.
pub struct UnavailableRepository;

#[async_trait]
impl LinkRepository for UnavailableRepository {
    async fn insert(&self, _url: &str) -> Result<i64, StorageError> {
        Err(StorageError::Unavailable("connection refused".to_string()))
    }

    async fn find_url(&self, _id: i64) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("connection refused".to_string()))
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryCache>) {
    let cache = Arc::new(InMemoryCache::new());
    let state = AppState::new(Arc::new(InMemoryLinkRepository::new()), cache.clone());
    (state, cache)
}

pub fn create_state_with(
    repository: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
) -> AppState {
    AppState::new(repository, cache)
}

pub fn create_unavailable_state() -> AppState {
    AppState::new(Arc::new(UnavailableRepository), Arc::new(NullCache::new()))
}

pub fn create_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}
