//! Journal Service Client
//!
//! Thin REST layer over the hosted journal service: authentication,
//! per-user entry documents, and picture blob storage.

pub mod auth;
pub mod entries;
pub mod error;
pub mod storage;

pub use error::ApiError;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8084/api/v1";

const API_BASE_KEY: &str = "daybook_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Error body returned by the service on non-OK responses
#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Decode a non-OK response into an [`ApiError`]
pub(crate) async fn error_from_response(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => response.status_text(),
    };
    ApiError::Http { status, message }
}
