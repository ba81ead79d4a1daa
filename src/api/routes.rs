//! Endpoint routing.

use crate::api::handlers::{
    health_handler, index_handler, redirect_handler, shorten_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service endpoints.
///
/// # Endpoints
///
/// - `GET  /`             - HTML form
/// - `POST /shorten`      - Create a short link (JSON or form body)
/// - `GET  /stats/{code}` - Record and click count for a code
/// - `GET  /health`       - Database health check
/// - `GET  /{code}`       - 302 redirect to the stored URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
