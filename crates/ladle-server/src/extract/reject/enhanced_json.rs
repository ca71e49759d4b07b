//! Enhanced JSON extractor with improved error handling.
//!
//! This module provides [`Json`], an enhanced version of [`axum::Json`] with
//! better error messages and OpenAPI documentation support.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Json as AxumJson, OptionalFromRequest, Request};
use axum::response::{IntoResponse, Response};
use derive_more::{Deref, DerefMut, From};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};

/// Enhanced JSON extractor with improved error handling.
///
/// This extractor provides better error messages compared to the
/// default Axum JSON extractor. All errors are automatically converted to
/// appropriate HTTP responses with detailed error messages.
///
/// [`Json`]: AxumJson
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Creates a new [`Json`] wrapper around the provided value.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let extractor = <AxumJson<T> as FromRequest<S>>::from_request(req, state).await;
        extractor.map(|x| Self::new(x.0)).map_err(Into::into)
    }
}

impl<T, S> OptionalFromRequest<S> for Json<T>
where
    T: DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        let result = <Self as FromRequest<S>>::from_request(req, state).await;

        match result {
            Ok(json) => Ok(Some(json)),
            Err(error) => {
                // For optional extraction, only propagate server errors
                // Client errors (like malformed JSON) result in None
                match error.kind() {
                    ErrorKind::InternalServerError => Err(error),
                    _ => Ok(None),
                }
            }
        }
    }
}

impl<T> IntoResponse for Json<T>
where
    T: Serialize,
{
    #[inline]
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

impl From<JsonRejection> for Error<'static> {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => ErrorKind::BadRequest
                .with_message("Request body does not match the expected shape")
                .with_context(err.to_string()),
            JsonRejection::JsonSyntaxError(err) => ErrorKind::BadRequest
                .with_message("Request body is not valid JSON")
                .with_context(err.to_string()),
            JsonRejection::MissingJsonContentType(_) => ErrorKind::BadRequest
                .with_message("Expected request with `Content-Type: application/json`"),
            JsonRejection::BytesRejection(err) => {
                tracing::error!(error = %err, "failed to buffer request body");
                ErrorKind::InternalServerError.into_error()
            }
            rejection => {
                tracing::error!(rejection = ?rejection, "unhandled JSON rejection");
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

impl<T> aide::OperationInput for Json<T>
where
    T: schemars::JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        AxumJson::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        AxumJson::<T>::inferred_early_responses(ctx, operation)
    }
}

impl<T> aide::OperationOutput for Json<T>
where
    T: schemars::JsonSchema + Serialize,
{
    type Inner = T;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        AxumJson::<T>::operation_response(ctx, operation)
    }

    fn inferred_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        AxumJson::<T>::inferred_responses(ctx, operation)
    }
}
