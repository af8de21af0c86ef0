//! API Error Taxonomy
//!
//! Explicit error type threaded from the service client back to the UI
//! layer. No call site retries; callers decide what, if anything, to show.

use thiserror::Error;

/// Errors surfaced by the journal service client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (connectivity, CORS, aborted fetch).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-OK status.
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Parse(String),

    /// Sign-in was rejected, whatever the underlying cause.
    #[error("invalid credentials")]
    InvalidCredentials,
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_errors_map_to_parse() {
        let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ApiError = gloo_net::Error::SerdeError(serde_err).into();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn test_http_error_display() {
        let err = ApiError::Http {
            status: 403,
            message: "forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "request failed (403): forbidden");
    }

    #[test]
    fn test_invalid_credentials_display() {
        assert_eq!(ApiError::InvalidCredentials.to_string(), "invalid credentials");
    }
}
