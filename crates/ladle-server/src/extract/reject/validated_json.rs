//! Validated JSON extractor with automatic validation.
//!
//! This module provides [`ValidateJson`], an enhanced JSON extractor that
//! combines deserialization with automatic validation using the `validator`
//! crate.

use axum::extract::{FromRequest, Request};
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::Json;
use crate::handler::{Error, ErrorKind};

/// Enhanced JSON extractor with automatic validation.
///
/// This extractor combines JSON deserialization with automatic validation,
/// providing error messages for validation failures. It works with any type
/// that implements both `serde::Deserialize` and `validator::Validate`.
///
/// Also see [`Json`].
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct ValidateJson<T>(pub T);

impl<T> ValidateJson<T> {
    /// Creates a new instance of [`ValidateJson`].
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner validated value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // First, deserialize the JSON
        let Json(data) = <Json<T> as FromRequest<S>>::from_request(req, state).await?;

        // Then validate the deserialized data
        data.validate()?;
        Ok(Self::new(data))
    }
}

impl From<ValidationErrors> for Error<'static> {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let codes = errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_deref()
                            .map(str::to_owned)
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{field}: {codes}")
            })
            .collect();
        details.sort();

        ErrorKind::BadRequest
            .with_message("Request validation failed")
            .with_context(details.join("; "))
    }
}

impl<T> aide::OperationInput for ValidateJson<T>
where
    T: schemars::JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        Json::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        Json::<T>::inferred_early_responses(ctx, operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize, Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
    }

    #[test]
    fn validation_errors_map_to_bad_request() {
        let probe = Probe {
            name: String::new(),
        };
        let errors = probe.validate().unwrap_err();
        let error: Error = errors.into();

        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert!(error.context().unwrap().contains("name: must not be empty"));
    }
}
