//! Utility functions for code generation, URL processing, and request handling.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_normalizer`] - URL validation and scheme qualification
//! - [`request_origin`] - Public origin resolution for short URLs

pub mod code_generator;
pub mod request_origin;
pub mod url_normalizer;
