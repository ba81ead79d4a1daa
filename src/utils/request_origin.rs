//! Public origin resolution for building short URLs.

use axum::http::{HeaderMap, Uri, header};

const FORWARDED_PROTO: &str = "x-forwarded-proto";
const FORWARDED_HOST: &str = "x-forwarded-host";

/// How the service learns its own public origin.
#[derive(Debug, Clone, Default)]
pub struct OriginPolicy {
    /// Fixed origin (e.g. `https://s.example.com`), overrides request headers.
    pub base_url: Option<String>,
    /// Trust `X-Forwarded-Proto` / `X-Forwarded-Host` from a reverse proxy.
    pub behind_proxy: bool,
}

impl OriginPolicy {
    /// Resolves the `scheme://host[:port]` the client used to reach us.
    ///
    /// Resolution order:
    /// 1. Configured `base_url`
    /// 2. Forwarded headers, when `behind_proxy` is set
    /// 3. `Host` header, with scheme `http`
    /// 4. Authority of the request URI
    /// 5. `http://localhost`
    ///
    /// The returned origin never ends with `/`.
    pub fn resolve(&self, headers: &HeaderMap, uri: &Uri) -> String {
        if let Some(base) = &self.base_url {
            return base.trim_end_matches('/').to_string();
        }

        let mut scheme = uri.scheme_str().unwrap_or("http").to_string();
        let mut host = header_str(headers, header::HOST.as_str())
            .or_else(|| uri.authority().map(|a| a.as_str().to_string()));

        if self.behind_proxy {
            if let Some(proto) = header_str(headers, FORWARDED_PROTO) {
                scheme = proto;
            }
            if let Some(forwarded) = header_str(headers, FORWARDED_HOST) {
                host = Some(forwarded);
            }
        }

        let host = host.unwrap_or_else(|| "localhost".to_string());
        format!("{}://{}", scheme, host.trim_end_matches('/'))
    }

    /// Builds the short URL for `code`.
    pub fn short_url(&self, headers: &HeaderMap, uri: &Uri, code: &str) -> String {
        format!("{}/{}", self.resolve(headers, uri), code)
    }
}

/// First comma-separated value of a header, trimmed.
fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.insert(*k, HeaderValue::from_static(v));
        }
        map
    }

    #[test]
    fn test_resolve_from_host_header() {
        let policy = OriginPolicy::default();
        let h = headers(&[("host", "s.example.com:3000")]);
        assert_eq!(
            policy.resolve(&h, &Uri::from_static("/shorten")),
            "http://s.example.com:3000"
        );
    }

    #[test]
    fn test_base_url_wins() {
        let policy = OriginPolicy {
            base_url: Some("https://sho.rt/".to_string()),
            behind_proxy: true,
        };
        let h = headers(&[("host", "internal:3000"), ("x-forwarded-host", "x.io")]);
        assert_eq!(
            policy.short_url(&h, &Uri::from_static("/shorten"), "abc123"),
            "https://sho.rt/abc123"
        );
    }

    #[test]
    fn test_forwarded_headers_used_behind_proxy() {
        let policy = OriginPolicy {
            base_url: None,
            behind_proxy: true,
        };
        let h = headers(&[
            ("host", "127.0.0.1:3000"),
            ("x-forwarded-proto", "https, http"),
            ("x-forwarded-host", "s.example.com"),
        ]);
        assert_eq!(
            policy.resolve(&h, &Uri::from_static("/shorten")),
            "https://s.example.com"
        );
    }

    #[test]
    fn test_forwarded_headers_ignored_without_proxy() {
        let policy = OriginPolicy::default();
        let h = headers(&[
            ("host", "127.0.0.1:3000"),
            ("x-forwarded-proto", "https"),
            ("x-forwarded-host", "evil.example"),
        ]);
        assert_eq!(
            policy.resolve(&h, &Uri::from_static("/shorten")),
            "http://127.0.0.1:3000"
        );
    }

    #[test]
    fn test_falls_back_to_uri_authority() {
        let policy = OriginPolicy::default();
        let uri: Uri = "http://localhost:8080/shorten".parse().unwrap();
        assert_eq!(
            policy.resolve(&HeaderMap::new(), &uri),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_falls_back_to_localhost() {
        let policy = OriginPolicy::default();
        assert_eq!(
            policy.resolve(&HeaderMap::new(), &Uri::from_static("/shorten")),
            "http://localhost"
        );
    }
}
