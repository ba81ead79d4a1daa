//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the code
/// 2. Count the click with one atomic increment (retried on storage errors)
/// 3. Return `302 Found` with `Location` set to the stored URL
///
/// A failed increment is logged and counted in
/// `click_increment_failures_total`; the redirect is still returned.
///
/// # Errors
///
/// Returns `404` with the plain-text body `Not found` for unknown codes
/// (unlike the JSON errors of the API endpoints).
/// Returns `500` JSON if the lookup itself fails, or if the stored URL cannot
/// be sent as a header; no click is counted then.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = match state.link_service.get_link_by_code(&code).await {
        Ok(record) => record,
        Err(AppError::NotFound { .. }) => {
            debug!("Unknown code: {}", code);
            return Ok((StatusCode::NOT_FOUND, "Not found").into_response());
        }
        Err(e) => return Err(e),
    };

    let location = HeaderValue::try_from(record.url.as_str()).map_err(|e| {
        AppError::internal(
            "Stored URL is not a valid Location",
            json!({ "code": code, "reason": e.to_string() }),
        )
    })?;

    match state.link_service.record_click(&code).await {
        Ok(true) => {}
        Ok(false) => warn!("Click for {} not counted: record disappeared", code),
        Err(e) => {
            metrics::counter!("click_increment_failures_total").increment(1);
            warn!("Failed to count click for {}: {}", code, e);
        }
    }

    metrics::counter!("redirects_total").increment(1);

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
