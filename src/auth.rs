//! Shared-secret API key check

use std::sync::Arc;

use warp::http::HeaderMap;
use warp::{Filter, Rejection};

use crate::error::ApiError;

/// Header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// Compare the supplied raw header bytes against the configured secret
///
/// Header values need not be UTF-8; anything other than an exact byte match is denied.
pub fn verify(supplied: Option<&[u8]>, expected: &str) -> Result<(), ApiError> {
    match supplied {
        Some(key) if key == expected.as_bytes() => Ok(()),
        _ => Err(ApiError::Unauthorized),
    }
}

/// Filter that rejects with [`ApiError::Unauthorized`] unless the request carries the secret
pub fn with_api_key(expected: Arc<str>) -> impl Filter<Extract = (), Error = Rejection> + Clone {
    warp::header::headers_cloned()
        .and_then(move |headers: HeaderMap| {
            let expected = expected.clone();
            async move {
                let supplied = headers.get(API_KEY_HEADER).map(|value| value.as_bytes());
                verify(supplied, &expected).map_err(warp::reject::custom)
            }
        })
        .untuple_one()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_key_allowed() {
        assert!(verify(Some(b"secret".as_slice()), "secret").is_ok());
    }

    #[test]
    fn test_wrong_key_denied() {
        assert!(matches!(
            verify(Some(b"guess".as_slice()), "secret"),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn test_missing_key_denied() {
        assert!(matches!(verify(None, "secret"), Err(ApiError::Unauthorized)));
    }

    #[test]
    fn test_comparison_is_exact() {
        assert!(verify(Some(b"Secret".as_slice()), "secret").is_err());
        assert!(verify(Some(b"secret ".as_slice()), "secret").is_err());
        assert!(verify(Some(b"".as_slice()), "secret").is_err());
    }

    #[test]
    fn test_non_utf8_key_denied() {
        assert!(matches!(
            verify(Some(b"\xe9t\xe9".as_slice()), "secret"),
            Err(ApiError::Unauthorized)
        ));
    }
}
