//! Application layer services implementing business logic.
//!
//! Services orchestrate validation, code generation and repository calls, and
//! give HTTP handlers a storage-agnostic API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, resolution and click tracking

pub mod services;
