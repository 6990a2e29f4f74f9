//! Bearer Credential Extraction
//!
//! Parses `Authorization: <scheme> <credential>` headers.

use axum::http::{HeaderMap, header};

/// Authentication scheme accepted by [`extract_bearer_token`]
pub const BEARER_SCHEME: &str = "Bearer";

/// What the `Authorization` header carried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BearerCredential<'a> {
    /// No header, a blank header, or `Bearer` with nothing after it
    Absent,
    /// A single bearer credential
    Present(&'a str),
    /// Something was sent but it cannot be a bearer credential: another
    /// scheme, extra segments, or a value that is not visible ASCII
    Unusable,
}

/// Extract the bearer credential from request headers
///
/// The header value is split on whitespace. The scheme is matched
/// case-insensitively (RFC 9110 §11.1).
pub fn extract_bearer_token(headers: &HeaderMap) -> BearerCredential<'_> {
    let Some(raw) = headers.get(header::AUTHORIZATION) else {
        return BearerCredential::Absent;
    };
    let Ok(value) = raw.to_str() else {
        return BearerCredential::Unusable;
    };

    let mut parts = value.split_whitespace();
    let Some(scheme) = parts.next() else {
        return BearerCredential::Absent;
    };
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return BearerCredential::Unusable;
    }

    let Some(token) = parts.next() else {
        return BearerCredential::Absent;
    };
    // "Bearer a b" is not a single credential
    if parts.next().is_some() {
        return BearerCredential::Unusable;
    }

    BearerCredential::Present(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(
            extract_bearer_token(&headers),
            BearerCredential::Present("abc.def.ghi")
        );
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let headers = headers_with("bearer   abc.def.ghi");
        assert_eq!(
            extract_bearer_token(&headers),
            BearerCredential::Present("abc.def.ghi")
        );
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(
            extract_bearer_token(&HeaderMap::new()),
            BearerCredential::Absent
        );
    }

    #[test]
    fn test_blank_header_is_absent() {
        assert_eq!(extract_bearer_token(&headers_with("")), BearerCredential::Absent);
        assert_eq!(extract_bearer_token(&headers_with("   ")), BearerCredential::Absent);
    }

    #[test]
    fn test_scheme_without_credential() {
        assert_eq!(
            extract_bearer_token(&headers_with("Bearer")),
            BearerCredential::Absent
        );
        assert_eq!(
            extract_bearer_token(&headers_with("Bearer   ")),
            BearerCredential::Absent
        );
    }

    #[test]
    fn test_other_scheme_is_unusable() {
        assert_eq!(
            extract_bearer_token(&headers_with("Basic dXNlcjpwYXNz")),
            BearerCredential::Unusable
        );
    }

    #[test]
    fn test_extra_segments_are_unusable() {
        assert_eq!(
            extract_bearer_token(&headers_with("Bearer a b")),
            BearerCredential::Unusable
        );
    }

    #[test]
    fn test_non_ascii_value_is_unusable() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xe9t\xe9").unwrap(),
        );
        assert_eq!(extract_bearer_token(&headers), BearerCredential::Unusable);
    }
}
