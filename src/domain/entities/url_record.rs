//! URL record entity: one short code mapped to one target URL.

use chrono::{DateTime, Utc};

/// A persisted short link.
///
/// `code`, `url` and `created_at` never change after creation; `clicks` only
/// grows, one step per redirect.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub code: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(code: String, url: String, created_at: DateTime<Utc>, clicks: i64) -> Self {
        Self {
            code,
            url,
            created_at,
            clicks,
        }
    }
}

/// Input data for creating a new record. Clicks always start at zero.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub code: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl NewUrlRecord {
    /// Stamps `created_at` with the current time.
    pub fn now(code: String, url: String) -> Self {
        Self {
            code,
            url,
            created_at: Utc::now(),
        }
    }

    /// The record as it exists right after a successful insert.
    pub fn into_record(self) -> UrlRecord {
        UrlRecord::new(self.code, self.url, self.created_at, 0)
    }
}
