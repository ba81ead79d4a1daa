//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
};
use tracing::info;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::JsonOrForm;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// JSON or form-encoded:
///
/// ```json
/// { "url": "https://example.com", "custom": "my-link" }
/// ```
///
/// `custom` is optional; omitted or empty means a random 6-character code.
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// { "short_url": "http://s.example.com/aB3xY9" }
/// ```
///
/// # Errors
///
/// - `400 {"error":"Invalid URL"}` - missing, empty, non-http(s) or hostless URL
/// - `400 {"error":"Invalid characters in custom code"}`
/// - `409 {"error":"Custom code in use"}`
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    JsonOrForm(payload): JsonOrForm<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let long_url = payload
        .url
        .as_deref()
        .ok_or_else(|| AppError::bad_request("Invalid URL"))?;

    payload.validate()?;

    let record = state
        .link_service
        .create_short_link(long_url, payload.custom.as_deref())
        .await?;

    info!(code = %record.code, "Short link created");

    let short_url = state.origin.short_url(&headers, &uri, &record.code);

    Ok((StatusCode::CREATED, Json(ShortenResponse { short_url })))
}
