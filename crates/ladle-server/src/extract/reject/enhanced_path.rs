//! Enhanced path parameter extractor with improved error handling.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path as AxumPath};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};

/// Enhanced path parameter extractor with improved error handling.
///
/// Deserializes path parameters into a typed struct and converts failures
/// into structured bad-request responses instead of plain-text rejections.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Path<T>(pub T);

impl<T> Path<T> {
    /// Returns the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let extractor = <AxumPath<T> as FromRequestParts<S>>::from_request_parts(parts, state).await;
        extractor.map(|x| Self(x.0)).map_err(Into::into)
    }
}

impl From<PathRejection> for Error<'static> {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => ErrorKind::BadRequest
                .with_message("Invalid path parameters")
                .with_context(err.to_string()),
            PathRejection::MissingPathParams(err) => {
                tracing::error!(error = %err, "route is missing path parameters");
                ErrorKind::InternalServerError.into_error()
            }
            rejection => {
                tracing::error!(rejection = ?rejection, "unhandled path rejection");
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

impl<T> aide::OperationInput for Path<T>
where
    T: schemars::JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        AxumPath::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        AxumPath::<T>::inferred_early_responses(ctx, operation)
    }
}
