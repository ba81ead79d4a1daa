//! DTO for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// Statistics for a single short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl From<UrlRecord> for StatsResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            code: record.code,
            url: record.url,
            created_at: record.created_at,
            clicks: record.clicks,
        }
    }
}
