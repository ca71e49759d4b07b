//! HTTP error response body.

use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schemars::JsonSchema;
use serde::Serialize;

/// HTTP error response representation.
///
/// This struct contains all the information needed to serialize an error
/// response, including the error name, message, HTTP status code, resource
/// information, and user-friendly messages.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ErrorResponse<'a> {
    /// The error name/type identifier
    pub name: Cow<'a, str>,
    /// User-friendly error message safe for client display
    pub message: Cow<'a, str>,
    /// The resource that the error relates to (optional, set by handler)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Cow<'a, str>>,
    /// Additional context for debugging (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Cow<'a, str>>,
    /// HTTP status code (not serialized in JSON)
    #[serde(skip)]
    #[schemars(skip)]
    pub status: StatusCode,
}

impl<'a> ErrorResponse<'a> {
    // 4xx Client Errors
    pub const BAD_REQUEST: Self = Self::new(
        "bad_request",
        "The request could not be processed due to invalid data",
        StatusCode::BAD_REQUEST,
    );
    pub const CONFLICT: Self = Self::new(
        "conflict",
        "The request conflicts with the current state of the resource",
        StatusCode::CONFLICT,
    );
    // 5xx Server Errors
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "internal_server_error",
        "An internal server error occurred. Please try again later",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const MISSING_AUTH_TOKEN: Self = Self::new(
        "missing_auth_token",
        "Authentication is required to access this resource",
        StatusCode::UNAUTHORIZED,
    );
    pub const NOT_FOUND: Self = Self::new(
        "not_found",
        "The requested resource was not found",
        StatusCode::NOT_FOUND,
    );
    pub const UNAUTHORIZED: Self = Self::new(
        "unauthorized",
        "Invalid or expired authentication credentials",
        StatusCode::UNAUTHORIZED,
    );

    /// Creates a new error response.
    #[inline]
    pub const fn new(name: &'a str, message: &'a str, status: StatusCode) -> Self {
        Self {
            name: Cow::Borrowed(name),
            message: Cow::Borrowed(message),
            resource: None,
            context: None,
            status,
        }
    }

    /// Creates a new error response with custom resource.
    /// If a resource already exists, it merges them with a separator.
    pub fn with_resource(mut self, resource: impl Into<Cow<'a, str>>) -> Self {
        let new_resource = resource.into();
        self.resource = Some(match self.resource {
            Some(existing) => Cow::Owned(format!("{}/{}", existing, new_resource)),
            None => new_resource,
        });
        self
    }

    /// Creates a new error response with custom message.
    /// Replaces the default message for this error kind.
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Attaches context to the error response.
    /// If context already exists, it merges them with a separator.
    pub fn with_context(mut self, context: impl Into<Cow<'a, str>>) -> Self {
        let new_context = context.into();
        self.context = Some(match self.context {
            Some(existing) => Cow::Owned(format!("{}; {}", existing, new_context)),
            None => new_context,
        });
        self
    }
}

impl Default for ErrorResponse<'_> {
    #[inline]
    fn default() -> Self {
        Self::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ErrorResponse<'_> {
    #[inline]
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_optional_fields() {
        let json = serde_json::to_value(ErrorResponse::NOT_FOUND).expect("serializes");
        assert_eq!(json["name"], "not_found");
        assert!(json.get("resource").is_none());
        assert!(json.get("context").is_none());
        assert!(json.get("status").is_none());
    }

    #[test]
    fn with_resource_merges() {
        let response = ErrorResponse::NOT_FOUND
            .with_resource("recipe")
            .with_resource("ingredient");
        assert_eq!(response.resource.as_deref(), Some("recipe/ingredient"));
    }

    #[test]
    fn with_message_replaces_default() {
        let response = ErrorResponse::CONFLICT.with_message("Username already exists");
        assert_eq!(response.message, "Username already exists");
    }
}
