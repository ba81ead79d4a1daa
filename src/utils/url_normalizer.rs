//! URL validation and scheme qualification.
//!
//! Input is trimmed and, when it carries no scheme, prefixed with `http://`.
//! The result is checked for an `http`/`https` scheme, a `//authority` part
//! and a non-empty host. Control characters anywhere in the input are rejected
//! since the stored string is later sent back verbatim in `Location`.
//! No other canonicalization is applied: the returned string is the trimmed
//! input (plus any added scheme), byte for byte.

use url::{ParseError, Url};

/// Scheme prepended to input that has none.
const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Errors that can occur during URL normalization.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,

    #[error("URL contains control characters")]
    ControlCharacters,
}

/// Validates `input` and returns it as a scheme-qualified URL string.
///
/// # Rules
///
/// 1. Leading and trailing whitespace is removed; empty input is rejected
/// 2. Input without a scheme gets `http://` prepended and is parsed again
/// 3. The scheme must be `http` or `https`
/// 4. The scheme must be followed by `//` and a non-empty authority
/// 5. The host must be non-empty
/// 6. No ASCII control characters (the parser silently drops tabs and newlines)
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("example.com").unwrap(), "http://example.com");
/// assert_eq!(normalize_url(" https://a.io/x/ ").unwrap(), "https://a.io/x/");
/// assert!(normalize_url("ftp://x.com").is_err());
/// assert!(normalize_url("http://").is_err());
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    if trimmed.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlNormalizationError::ControlCharacters);
    }

    let (candidate, parsed) = match Url::parse(trimmed) {
        Ok(url) => (trimmed.to_string(), url),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let qualified = format!("{DEFAULT_SCHEME_PREFIX}{trimmed}");
            let url = Url::parse(&qualified).map_err(map_parse_error)?;
            (qualified, url)
        }
        Err(e) => return Err(map_parse_error(e)),
    };

    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if !has_authority(&candidate, parsed.scheme().len()) {
        return Err(UrlNormalizationError::MissingHost);
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    Ok(candidate)
}

/// True if `candidate` reads `scheme://authority...` with a non-empty authority.
///
/// The parser invents a host for `http:example.com` and `https:/example.com`,
/// so the raw text is checked instead.
fn has_authority(candidate: &str, scheme_len: usize) -> bool {
    let Some(rest) = candidate
        .get(scheme_len + 1..)
        .and_then(|r| r.strip_prefix("//"))
    else {
        return false;
    };

    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    !authority.is_empty()
}

fn map_parse_error(e: ParseError) -> UrlNormalizationError {
    match e {
        ParseError::EmptyHost => UrlNormalizationError::MissingHost,
        other => UrlNormalizationError::InvalidFormat(other.to_string()),
    }
}
