//! Authenticated identity resolved from the session store.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use ladle_postgres::model::Chef;

use super::SessionHeader;
use crate::TRACING_TARGET_AUTHENTICATION;
use crate::handler::{Error, ErrorKind};
use crate::service::SessionStore;

/// The authenticated chef behind the presented session token.
///
/// Extraction fails with 401 when the header is missing or the token does
/// not resolve to a live session (never issued, or removed by logout).
#[must_use]
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    /// The token the request presented.
    pub token: String,
    /// The chef the token resolves to.
    pub chef: Chef,
}

impl<S> FromRequestParts<S> for SessionIdentity
where
    SessionStore: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = <SessionHeader as FromRequestParts<S>>::from_request_parts(parts, state).await?;
        let sessions = SessionStore::from_ref(state);

        let token = header.into_token();
        let Some(chef) = sessions.get(&token) else {
            tracing::debug!(
                target: TRACING_TARGET_AUTHENTICATION,
                "session token did not resolve to a live session"
            );
            return Err(ErrorKind::Unauthorized.into_error());
        };

        Ok(Self { token, chef })
    }
}

impl aide::OperationInput for SessionIdentity {}
