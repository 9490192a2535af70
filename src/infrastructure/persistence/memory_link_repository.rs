//! In-process link store.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::error::StorageError;
use crate::domain::repositories::LinkRepository;

/// Link store held in memory.
///
/// Identifiers come from a counter starting at `1`, matching a fresh
/// PostgreSQL sequence. Contents are lost when the process exits.
#[derive(Debug)]
pub struct InMemoryLinkRepository {
    next_id: AtomicI64,
    urls: DashMap<i64, String>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            urls: DashMap::new(),
        }
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, url: &str) -> Result<i64, StorageError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if id <= 0 {
            return Err(StorageError::Unavailable(
                "identifier space exhausted".to_string(),
            ));
        }

        self.urls.insert(id, url.to_string());
        Ok(id)
    }

    async fn find_url(&self, id: i64) -> Result<Option<String>, StorageError> {
        Ok(self.urls.get(&id).map(|entry| entry.value().clone()))
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
