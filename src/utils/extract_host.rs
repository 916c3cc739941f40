//! Public base URL extraction from HTTP request headers.

use axum::http::{HeaderMap, header};

/// Header set by reverse proxies that terminate TLS.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds the `scheme://host[:port]` prefix clients used to reach the service.
///
/// The scheme comes from `X-Forwarded-Proto` when present (`http` otherwise)
/// and the authority from the `Host` header, port included. Returns `None`
/// when the `Host` header is missing or not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:5000".parse().unwrap());
///
/// assert_eq!(base_url_from_headers(&headers).unwrap(), "http://localhost:5000");
/// ```
pub fn base_url_from_headers(headers: &HeaderMap) -> Option<String> {
    let host = headers.get(header::HOST)?.to_str().ok()?.trim();
    if host.is_empty() {
        return None;
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(',').next().unwrap_or(v).trim())
        .filter(|v| v.eq_ignore_ascii_case("https") || v.eq_ignore_ascii_case("http"))
        .unwrap_or("http")
        .to_ascii_lowercase();

    Some(format!("{}://{}", scheme, host))
}
