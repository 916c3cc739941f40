//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for short code mappings.
///
/// Uniqueness of `short` is enforced by the `urls_short_key` constraint, and
/// visit counting is a single `UPDATE ... RETURNING`, so concurrent resolves
/// never lose increments.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO urls (original, short, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, original, short, visit_count, expires_at, created_at
            "#,
        )
        .bind(new_record.original)
        .bind(new_record.short)
        .bind(new_record.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_short(&self, short: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, original, short, visit_count, expires_at, created_at
            FROM urls
            WHERE short = $1
            "#,
        )
        .bind(short)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn increment_visit(&self, id: i64) -> Result<UrlRecord, AppError> {
        sqlx::query_as::<_, UrlRecord>(
            r#"
            UPDATE urls
            SET visit_count = visit_count + 1
            WHERE id = $1
            RETURNING id, original, short, visit_count, expires_at, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or_else(|| AppError::not_found("Record not found", json!({ "id": id })))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let records = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, original, short, visit_count, expires_at, created_at
            FROM urls
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;

        Ok(())
    }
}
