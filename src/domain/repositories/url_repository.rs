//! Repository trait for short link storage.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of [`UrlRepository::insert_if_absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The code was free and the record is now stored.
    Created(UrlRecord),
    /// Another record already owns the code; nothing was written.
    Conflict,
}

/// Aggregate counters over the whole store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreTotals {
    pub links: i64,
    pub clicks: i64,
}

/// Storage contract for short links.
///
/// Implementations must make [`insert_if_absent`](Self::insert_if_absent) and
/// [`increment_clicks`](Self::increment_clicks) atomic in the storage layer:
/// racing inserts of one code yield exactly one `Created`, and N concurrent
/// increments advance the counter by exactly N.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Errors
///
/// Every method returns [`AppError::StorageUnavailable`] on connection or I/O
/// failure. A missing code is a normal outcome, never an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds a record by its code.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Returns true if a record with this code exists.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Stores the record unless the code is already taken.
    async fn insert_if_absent(&self, new_record: NewUrlRecord) -> Result<InsertOutcome, AppError>;

    /// Adds one click to the record.
    ///
    /// Returns `Ok(false)` if no record has this code.
    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError>;

    /// Lists the most recently created records, newest first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError>;

    /// Counts records and sums their clicks.
    async fn totals(&self) -> Result<StoreTotals, AppError>;

    /// Round-trips a trivial query to check the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
