//! Request body extractor accepting JSON or URL-encoded forms.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppError;

/// Deserializes the body as JSON or as a form, based on `Content-Type`.
///
/// A body with any other (or no) content type is read as an empty form, so
/// `T::default()` is produced and field validation reports what is missing.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with `Invalid request body` when the body
/// does not deserialize into `T`.
pub struct JsonOrForm<T>(pub T);

enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("application/json") || content_type.contains("+json") {
        BodyKind::Json
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Json => {
                let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
                    debug!("Rejected JSON body: {}", e);
                    AppError::bad_request("Invalid request body")
                })?;
                Ok(Self(value))
            }
            BodyKind::Form => {
                let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
                    debug!("Rejected form body: {}", e);
                    AppError::bad_request("Invalid request body")
                })?;
                Ok(Self(value))
            }
            BodyKind::Other => Ok(Self(T::default())),
        }
    }
}
