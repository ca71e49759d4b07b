//! Session token extraction from the `Authorization` header.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::TRACING_TARGET_AUTHENTICATION;
use crate::handler::{Error, ErrorKind};

/// The session token presented in the `Authorization` request header.
///
/// Accepts both the conventional `Bearer <token>` form and a bare token,
/// since clients echo the token back the way the login response handed it
/// out. The extractor performs no validation beyond presence; resolving the
/// token to a chef is the job of [`SessionIdentity`].
///
/// [`SessionIdentity`]: crate::extract::SessionIdentity
#[must_use]
#[derive(Debug, Clone)]
pub struct SessionHeader(pub String);

impl SessionHeader {
    /// Returns the raw token string.
    #[inline]
    pub fn token(&self) -> &str {
        &self.0
    }

    /// Consumes the extractor and returns the token.
    #[inline]
    pub fn into_token(self) -> String {
        self.0
    }

    /// Parses a header value into a token, stripping the `Bearer ` scheme
    /// prefix when present.
    fn parse(header: &str) -> Option<String> {
        let token = header
            .strip_prefix("Bearer ")
            .unwrap_or(header)
            .trim();

        if token.is_empty() {
            None
        } else {
            Some(token.to_owned())
        }
    }
}

impl<S> FromRequestParts<S> for SessionHeader
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Err(ErrorKind::MissingAuthToken.into_error());
        };

        let header = header.to_str().map_err(|_| {
            tracing::debug!(
                target: TRACING_TARGET_AUTHENTICATION,
                "authorization header is not valid UTF-8"
            );
            ErrorKind::MissingAuthToken.with_context("Authorization header is not valid UTF-8")
        })?;

        match Self::parse(header) {
            Some(token) => Ok(Self(token)),
            None => Err(ErrorKind::MissingAuthToken.into_error()),
        }
    }
}

impl<S> OptionalFromRequestParts<S> for SessionHeader
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        match <Self as FromRequestParts<S>>::from_request_parts(parts, state).await {
            Ok(header) => Ok(Some(header)),
            Err(_) => Ok(None),
        }
    }
}

impl aide::OperationInput for SessionHeader {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bearer_form() {
        assert_eq!(
            SessionHeader::parse("Bearer abc123").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn parses_bare_token() {
        assert_eq!(SessionHeader::parse("abc123").as_deref(), Some("abc123"));
    }

    #[test]
    fn rejects_empty_values() {
        assert_eq!(SessionHeader::parse(""), None);
        assert_eq!(SessionHeader::parse("Bearer "), None);
        assert_eq!(SessionHeader::parse("Bearer    "), None);
    }
}
