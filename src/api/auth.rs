//! Authentication Client
//!
//! Email/password sign-in against the journal service.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use super::{get_api_base, ApiError};
use crate::state::session::AuthUser;

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    token: String,
    user_id: String,
}

/// Sign in with email and password.
///
/// Any rejection from the service is reported as
/// [`ApiError::InvalidCredentials`]; the caller never inspects the
/// underlying cause.
pub async fn sign_in(email: &str, password: &str) -> Result<AuthUser, ApiError> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/sign-in", api_base))
        .json(&SignInRequest { email, password })?
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::InvalidCredentials);
    }

    let result: SignInResponse = response.json().await?;

    Ok(AuthUser {
        user_id: result.user_id,
        token: result.token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_response_wire_shape() {
        let result: SignInResponse =
            serde_json::from_str(r#"{"token":"tok-1","userId":"user-1"}"#).unwrap();
        assert_eq!(result.token, "tok-1");
        assert_eq!(result.user_id, "user-1");
    }

    #[test]
    fn test_sign_in_request_wire_shape() {
        let body = serde_json::to_value(SignInRequest {
            email: "me@example.com",
            password: "hunter2",
        })
        .unwrap();
        assert_eq!(body["email"], "me@example.com");
        assert_eq!(body["password"], "hunter2");
    }
}
