use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

/// Header carrying the admin API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Constant-time string comparison to prevent timing attacks
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Whether the request may use admin endpoints.
///
/// With no key configured the endpoints are open.
pub fn is_authorized(expected: Option<&str>, headers: &HeaderMap) -> bool {
    let Some(expected) = expected else {
        return true;
    };

    headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|provided| constant_time_compare(provided, expected))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("secret123", "secret123"));
        assert!(!constant_time_compare("secret123", "secret124"));
        assert!(!constant_time_compare("secret123", "secret12"));
        assert!(!constant_time_compare("", "secret"));
    }

    #[test]
    fn test_is_authorized_without_configured_key() {
        assert!(is_authorized(None, &HeaderMap::new()));
    }

    #[test]
    fn test_is_authorized_with_key() {
        let mut headers = HeaderMap::new();
        assert!(!is_authorized(Some("secret"), &headers));

        headers.insert(API_KEY_HEADER, HeaderValue::from_static("wrong"));
        assert!(!is_authorized(Some("secret"), &headers));

        headers.insert(API_KEY_HEADER, HeaderValue::from_static("secret"));
        assert!(is_authorized(Some("secret"), &headers));
    }
}
