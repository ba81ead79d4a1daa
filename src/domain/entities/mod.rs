//! Core domain entities.
//!
//! - [`UrlRecord`] - A persisted short link with its click counter
//! - [`NewUrlRecord`] - Input for creating a record

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
