//! # Tiny Shortener
//!
//! A small URL shortening service built with Axum and SQLite. Long URLs are
//! mapped to short, collision-free codes; `GET /{code}` redirects back and
//! counts the click.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `UrlRecord` entity and storage contract
//! - **Application Layer** ([`application`]) - Validation, code generation and orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Guarantees
//!
//! - Codes are unique: the store inserts with `ON CONFLICT DO NOTHING`, so
//!   racing requests for one code produce exactly one winner
//! - Clicks are never lost: each redirect runs one `clicks = clicks + 1` update
//! - A failed click update never breaks the redirect itself
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db"   # Optional, this is the default
//! cargo run
//!
//! curl -X POST localhost:3000/shorten -H 'content-type: application/json' \
//!      -d '{"url":"example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CodePolicy, LinkService};
    pub use crate::domain::entities::{NewUrlRecord, UrlRecord};
    pub use crate::domain::repositories::{InsertOutcome, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
