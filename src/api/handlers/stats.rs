//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record for a short code.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Response
///
/// ```json
/// {
///   "code": "aB3xY9",
///   "url": "http://example.com",
///   "created_at": "2025-01-01T12:00:00Z",
///   "clicks": 3
/// }
/// ```
///
/// Read-only: repeated calls return the same `clicks` until a redirect happens.
///
/// # Errors
///
/// Returns `404 {"error":"Not found"}` if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.link_service.get_link_by_code(&code).await?;

    Ok(Json(StatsResponse::from(record)))
}
