//! Picture Blob Storage Client
//!
//! Uploads locally-selected picture bytes under the user's namespace and
//! resolves the durable download URL to persist in the entry document.

use gloo_net::http::Request;
use serde::Deserialize;

use super::{error_from_response, get_api_base, ApiError};
use crate::state::session::AuthUser;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/// Object path for a picture uploaded at `timestamp_millis`
fn picture_object_path(user_id: &str, timestamp_millis: i64) -> String {
    format!("users/{}/pictures/{}", user_id, timestamp_millis)
}

/// Fetch a local picture resource and upload it, returning the durable
/// download URL.
///
/// The local reference is fetched with a plain GET; the browser serves
/// `blob:` object URLs itself. The blob is keyed by upload timestamp so
/// repeated saves never collide.
pub async fn save_picture(user: &AuthUser, local_url: &str) -> Result<String, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(local_url).send().await?;
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    let bytes = response.binary().await?;

    let path = picture_object_path(&user.user_id, chrono::Utc::now().timestamp_millis());
    let body = js_sys::Uint8Array::from(bytes.as_slice());

    let response = Request::post(&format!("{}/storage/{}", api_base, path))
        .header("Authorization", &format!("Bearer {}", user.token))
        .header("Content-Type", "application/octet-stream")
        .body(body)?
        .send()
        .await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let result: UploadResponse = response.json().await?;
    web_sys::console::log_1(&format!("saved picture: {}", result.url).into());
    Ok(result.url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_object_path_is_user_scoped() {
        assert_eq!(
            picture_object_path("user-1", 1700000000000),
            "users/user-1/pictures/1700000000000"
        );
    }

    #[test]
    fn test_upload_response_wire_shape() {
        let result: UploadResponse =
            serde_json::from_str(r#"{"url":"https://cdn.example/p.png"}"#).unwrap();
        assert_eq!(result.url, "https://cdn.example/p.png");
    }
}
