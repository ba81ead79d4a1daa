//! Application error type and its HTTP mapping.
//!
//! Every failure a handler can produce is an [`AppError`]. The variants map
//! one-to-one onto response status codes and render as `{"error": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced by services and handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad or missing input, detected before any storage mutation. (400)
    #[error("{message}")]
    Validation { message: String },

    /// Unknown short code. (404)
    #[error("{message}")]
    NotFound { message: String },

    /// The requested code is already taken. (409)
    #[error("{message}")]
    Conflict { message: String },

    /// Connection or I/O failure in the store. (500)
    #[error("{message}")]
    StorageUnavailable { message: String, details: Value },

    /// Any other server-side failure. (500)
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>, details: Value) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::StorageUnavailable { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message } => message,
            AppError::StorageUnavailable { message, details } => {
                tracing::error!(%details, "Storage unavailable: {}", message);
                message
            }
            AppError::Internal { message, details } => {
                tracing::error!(%details, "Internal error: {}", message);
                message
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        if errors.field_errors().contains_key("url") {
            AppError::bad_request("Invalid URL")
        } else {
            AppError::bad_request("Invalid custom code")
        }
    }
}

/// Maps a driver error onto the application taxonomy.
///
/// Unique-constraint violations become [`AppError::Conflict`]; everything else
/// is treated as the store being unavailable. The driver message is kept in
/// `details` for logging and never sent to the client.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict("Custom code in use");
    }

    AppError::storage(
        "Storage unavailable",
        serde_json::json!({ "reason": e.to_string() }),
    )
}
