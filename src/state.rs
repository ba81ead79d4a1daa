//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteUrlRepository;
use crate::utils::request_origin::OriginPolicy;

/// Handler state: the link service and the public-origin policy.
///
/// Cheap to clone; everything is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteUrlRepository>>,
    pub origin: Arc<OriginPolicy>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<SqliteUrlRepository>>, origin: OriginPolicy) -> Self {
        Self {
            link_service,
            origin: Arc::new(origin),
        }
    }
}
