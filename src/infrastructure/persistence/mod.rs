//! SQLite persistence.
//!
//! - [`database`] - Pool construction and embedded migrations
//! - [`SqliteUrlRepository`] - Short link storage and click counting

pub mod database;
pub mod sqlite_url_repository;

pub use database::{PoolSettings, connect, migrate};
pub use sqlite_url_repository::SqliteUrlRepository;
