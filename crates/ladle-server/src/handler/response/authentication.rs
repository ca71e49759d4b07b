//! Authentication response types.

use axum::Json;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Chef;

/// Response returned after successful login.
///
/// The token is issued in the body and echoed in the `Authorization`
/// response header as `Bearer <token>`.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The opaque session token.
    pub token: String,
    /// The authenticated chef.
    pub chef: Chef,
}

/// Successful login reply.
///
/// Serializes the [`LoginResponse`] body and echoes the token in the
/// `Authorization` response header as `Bearer <token>`.
#[must_use]
#[derive(Debug)]
pub struct LoginReply(pub LoginResponse);

impl IntoResponse for LoginReply {
    fn into_response(self) -> Response {
        let token = self.0.token.clone();
        let mut response = (StatusCode::OK, Json(self.0)).into_response();

        // Tokens are URL-safe base64, always a valid header value.
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
            response.headers_mut().insert(AUTHORIZATION, value);
        }

        response
    }
}

impl aide::OperationOutput for LoginReply {
    type Inner = LoginResponse;
}

/// Response returned after logout.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    /// Human-readable confirmation.
    pub message: String,
}

impl LogoutResponse {
    /// Creates the standard logout confirmation.
    pub fn new() -> Self {
        Self {
            message: "Logout successful".to_owned(),
        }
    }
}

impl Default for LogoutResponse {
    fn default() -> Self {
        Self::new()
    }
}
