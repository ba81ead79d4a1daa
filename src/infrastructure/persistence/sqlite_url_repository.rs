//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{InsertOutcome, StoreTotals, UrlRepository};
use crate::error::AppError;

/// SQLite repository for short link storage.
///
/// Uniqueness of `code` is enforced by the primary key; the insert uses
/// `ON CONFLICT DO NOTHING` so a lost race is reported as
/// [`InsertOutcome::Conflict`] rather than an error. Click counting is a
/// single `clicks = clicks + 1` statement.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT code, url, created_at, clicks
            FROM urls
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM urls WHERE code = ?1")
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(found.is_some())
    }

    async fn insert_if_absent(&self, new_record: NewUrlRecord) -> Result<InsertOutcome, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO urls (code, url, created_at, clicks)
            VALUES (?1, ?2, ?3, 0)
            ON CONFLICT(code) DO NOTHING
            "#,
        )
        .bind(&new_record.code)
        .bind(&new_record.url)
        .bind(new_record.created_at)
        .execute(self.pool.as_ref())
        .await;

        match result {
            Ok(done) if done.rows_affected() == 1 => {
                Ok(InsertOutcome::Created(new_record.into_record()))
            }
            Ok(_) => Ok(InsertOutcome::Conflict),
            Err(e) => match AppError::from(e) {
                AppError::Conflict { .. } => Ok(InsertOutcome::Conflict),
                other => Err(other),
            },
        }
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError> {
        let done = sqlx::query("UPDATE urls SET clicks = clicks + 1 WHERE code = ?1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(done.rows_affected() > 0)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        let records = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT code, url, created_at, clicks
            FROM urls
            ORDER BY created_at DESC, code ASC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }

    async fn totals(&self) -> Result<StoreTotals, AppError> {
        let (links, clicks): (i64, i64) =
            sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(clicks), 0) FROM urls")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(StoreTotals { links, clicks })
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
