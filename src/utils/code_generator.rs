//! Short code generation and validation utilities.
//!
//! Random codes are drawn from a cryptographically secure generator over the
//! 62-symbol alphanumeric alphabet. Custom codes supplied by users are checked
//! against the `[A-Za-z0-9_-]+` character set and the reserved route names.

use crate::error::AppError;
use rand::{Rng, distr::Alphanumeric};
use regex::Regex;
use std::sync::LazyLock;

/// Default length of generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Compiled regex for custom code validation.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("custom code regex is valid"));

/// Codes that would shadow service routes.
pub const RESERVED_CODES: &[&str] = &["shorten", "stats", "health"];

/// Generates a random short code of `length` characters.
///
/// Characters are drawn uniformly from `A-Z`, `a-z`, `0-9` using the
/// thread-local generator, which is a CSPRNG seeded from the OS.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true if `code` is one of [`RESERVED_CODES`].
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Must not be empty
/// - Cannot be a reserved route name
///
/// Callers treat an empty custom value as "no custom code requested" and never
/// pass it here.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::bad_request("Invalid characters in custom code"));
    }

    if is_reserved(code) {
        return Err(AppError::bad_request("Custom code is reserved"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        assert_eq!(generate_code(DEFAULT_CODE_LENGTH).len(), 6);
        assert_eq!(generate_code(12).len(), 12);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..200 {
            let code = generate_code(DEFAULT_CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code(10)).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_uses_whole_alphabet() {
        let seen: HashSet<char> = (0..500)
            .flat_map(|_| generate_code(DEFAULT_CODE_LENGTH).chars().collect::<Vec<_>>())
            .collect();
        assert!(seen.iter().any(|c| c.is_ascii_uppercase()));
        assert!(seen.iter().any(|c| c.is_ascii_lowercase()));
        assert!(seen.iter().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_validate_dash_and_underscore() {
        assert!(validate_custom_code("my-code_1").is_ok());
    }

    #[test]
    fn test_validate_mixed_case() {
        assert!(validate_custom_code("MyCode42").is_ok());
    }

    #[test]
    fn test_validate_single_char() {
        assert!(validate_custom_code("x").is_ok());
    }

    #[test]
    fn test_validate_space_rejected() {
        let err = validate_custom_code("my code").unwrap_err();
        assert_eq!(err.to_string(), "Invalid characters in custom code");
    }

    #[test]
    fn test_validate_special_characters() {
        assert!(validate_custom_code("a/b").is_err());
        assert!(validate_custom_code("a.b").is_err());
        assert!(validate_custom_code("a@b").is_err());
    }

    #[test]
    fn test_validate_non_ascii_rejected() {
        assert!(validate_custom_code("caf\u{e9}").is_err());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_custom_code("").is_err());
    }

    #[test]
    fn test_validate_all_reserved_codes() {
        for &reserved in RESERVED_CODES {
            let err = validate_custom_code(reserved).unwrap_err();
            assert_eq!(err.to_string(), "Custom code is reserved");
        }
    }
}
