//! Link creation, resolution and click tracking service.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, warn};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{InsertOutcome, StoreTotals, UrlRepository};
use crate::error::AppError;
use crate::utils::code_generator::{
    DEFAULT_CODE_LENGTH, generate_code, is_reserved, validate_custom_code,
};
use crate::utils::url_normalizer::normalize_url;

/// Extra attempts made for a failed click increment.
const CLICK_RETRIES: usize = 3;

/// Random code generation settings.
#[derive(Debug, Clone, Copy)]
pub struct CodePolicy {
    /// Number of characters in a generated code.
    pub length: usize,
    /// Collisions tolerated before giving up.
    pub max_attempts: usize,
}

impl Default for CodePolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
            max_attempts: 10,
        }
    }
}

/// Service for creating and resolving shortened links.
///
/// Uniqueness is guaranteed by the repository's atomic insert; the existence
/// pre-check on random codes only saves a write on the (rare) collision path.
pub struct LinkService<R: UrlRepository> {
    repository: Arc<R>,
    policy: CodePolicy,
}

impl<R: UrlRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>, policy: CodePolicy) -> Self {
        Self { repository, policy }
    }

    /// Creates a short link for `long_url`.
    ///
    /// An empty `custom_code` is treated like `None`, so a random code is
    /// generated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - URL is empty, not http(s), or has no host
    /// - Custom code contains characters outside `[A-Za-z0-9_-]` or is reserved
    ///
    /// Returns [`AppError::Conflict`] if the custom code is already taken.
    ///
    /// Returns [`AppError::Internal`] if no free random code was found within
    /// the configured number of attempts.
    pub async fn create_short_link(
        &self,
        long_url: &str,
        custom_code: Option<&str>,
    ) -> Result<UrlRecord, AppError> {
        let url = normalize_url(long_url).map_err(|e| {
            debug!("Rejected URL {:?}: {}", long_url, e);
            AppError::bad_request("Invalid URL")
        })?;

        let record = match custom_code.filter(|c| !c.is_empty()) {
            Some(custom) => {
                validate_custom_code(custom)?;

                match self
                    .repository
                    .insert_if_absent(NewUrlRecord::now(custom.to_string(), url))
                    .await?
                {
                    InsertOutcome::Created(record) => record,
                    InsertOutcome::Conflict => {
                        return Err(AppError::conflict("Custom code in use"));
                    }
                }
            }
            None => self.create_with_random_code(url).await?,
        };

        metrics::counter!("links_created_total").increment(1);
        Ok(record)
    }

    /// Retrieves a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    pub async fn get_link_by_code(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))
    }

    /// Adds one click to `code`, retrying transient storage failures.
    ///
    /// Returns `Ok(false)` if the code does not exist.
    pub async fn record_click(&self, code: &str) -> Result<bool, AppError> {
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(5)
            .max_delay(Duration::from_millis(100))
            .map(jitter)
            .take(CLICK_RETRIES);

        Retry::start(strategy, || self.repository.increment_clicks(code)).await
    }

    /// Most recently created links, newest first.
    pub async fn recent_links(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.list_recent(limit).await
    }

    /// Link count and click sum over the whole store.
    pub async fn totals(&self) -> Result<StoreTotals, AppError> {
        self.repository.totals().await
    }

    /// Checks that the store answers queries.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Draws random codes until one is inserted.
    ///
    /// Both a positive existence check and a lost insert race count as a
    /// collision.
    async fn create_with_random_code(&self, url: String) -> Result<UrlRecord, AppError> {
        for attempt in 1..=self.policy.max_attempts {
            let code = generate_code(self.policy.length);

            if is_reserved(&code) || self.repository.exists(&code).await? {
                debug!("Code collision on attempt {}: {}", attempt, code);
                continue;
            }

            match self
                .repository
                .insert_if_absent(NewUrlRecord::now(code, url.clone()))
                .await?
            {
                InsertOutcome::Created(record) => return Ok(record),
                InsertOutcome::Conflict => {
                    warn!("Insert race lost on attempt {}", attempt);
                }
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "attempts": self.policy.max_attempts }),
        ))
    }
}
