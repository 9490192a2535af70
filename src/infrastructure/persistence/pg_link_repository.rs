//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::error::StorageError;
use crate::domain::repositories::LinkRepository;

/// PostgreSQL link store.
///
/// Identifiers come from the `links.id` `BIGSERIAL` sequence, which hands out
/// distinct values to concurrent inserts.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, url: &str) -> Result<i64, StorageError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO links (url)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn find_url(&self, id: i64) -> Result<Option<String>, StorageError> {
        let url = sqlx::query_scalar::<_, String>(
            r#"
            SELECT url FROM links
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(url)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
