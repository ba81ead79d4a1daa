//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// Accepted as JSON or as an `application/x-www-form-urlencoded` body.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. A missing scheme is completed with `http://`.
    #[validate(length(max = 2048))]
    pub url: Option<String>,

    /// Optional custom short code. Empty means "generate one".
    #[validate(length(max = 64))]
    pub custom: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
