//! Authentication handlers for registration, login, logout, and session
//! introspection.
//!
//! Login mints an opaque random token and records it in the in-process
//! session store; the token is returned in the response body and echoed in
//! the `Authorization` header. Logout removes the token and is idempotent.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use ladle_postgres::query::ChefRepository;

use crate::extract::{Json, PgPool, SessionHeader, SessionIdentity, ValidateJson};
use crate::handler::request::{LoginChef, RegisterChef};
use crate::handler::response::{Chef, ErrorResponse, LoginReply, LoginResponse, LogoutResponse};
use crate::handler::{ErrorKind, Result};
use crate::service::{ServiceState, SessionStore, SessionToken};

/// Tracing target for authentication operations.
const TRACING_TARGET: &str = "ladle_server::handler::authentication";

/// Registers a new chef account.
///
/// A taken username maps to a conflict through the unique constraint, so
/// concurrent registrations of the same name cannot race past a pre-check.
#[tracing::instrument(skip_all)]
async fn register(
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<RegisterChef>,
) -> Result<(StatusCode, Json<Chef>)> {
    tracing::debug!(target: TRACING_TARGET, username = %request.username, "Registering chef");

    let chef = conn.create_chef(request.into_model()).await?;

    tracing::info!(target: TRACING_TARGET, chef_id = chef.id, "Chef registered");

    Ok((StatusCode::CREATED, Json(Chef::from_model(chef))))
}

fn register_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Register chef")
        .description("Registers a new chef. The username must not be taken.")
        .response::<201, Json<Chef>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<409, Json<ErrorResponse>>()
}

/// Authenticates a chef and opens a session.
///
/// The lookup is by exact username equality; the password is compared
/// verbatim. Failed credentials are a 401, never a server error.
#[tracing::instrument(skip_all)]
async fn login(
    PgPool(mut conn): PgPool,
    State(sessions): State<SessionStore>,
    ValidateJson(request): ValidateJson<LoginChef>,
) -> Result<LoginReply> {
    tracing::trace!(target: TRACING_TARGET, username = %request.username, "Login attempt");

    let chef = conn.find_chef_by_username(&request.username).await?;

    let Some(chef) = chef.filter(|chef| chef.password_matches(&request.password)) else {
        tracing::warn!(target: TRACING_TARGET, username = %request.username, "Login failed");
        return Err(ErrorKind::Unauthorized.with_message("Invalid username or password"));
    };

    let token = SessionToken::generate();
    sessions.insert(token.as_str(), chef.clone());

    tracing::info!(target: TRACING_TARGET, chef_id = chef.id, "Login successful");

    Ok(LoginReply(LoginResponse {
        token: token.into(),
        chef: Chef::from_model(chef),
    }))
}

fn login_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Login")
        .description(
            "Authenticates a chef. Returns the session token in the body and \
             echoes it in the `Authorization` response header.",
        )
        .response::<200, Json<LoginResponse>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
}

/// Closes the presented session.
///
/// Accepts `Bearer <token>` or a bare token. Logging out a token that is
/// missing, unknown, or already removed is a no-op success.
#[tracing::instrument(skip_all)]
async fn logout(
    State(sessions): State<SessionStore>,
    header: Option<SessionHeader>,
) -> Result<(StatusCode, Json<LogoutResponse>)> {
    if let Some(header) = header {
        let removed = sessions.remove(header.token());
        tracing::debug!(target: TRACING_TARGET, removed, "Logout processed");
    }

    Ok((StatusCode::OK, Json(LogoutResponse::new())))
}

fn logout_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Logout")
        .description("Closes the presented session. Logging out twice is a no-op success.")
        .response::<200, Json<LogoutResponse>>()
}

/// Returns the chef behind the presented session token.
#[tracing::instrument(skip_all, fields(chef_id = identity.chef.id))]
async fn session(identity: SessionIdentity) -> Result<(StatusCode, Json<Chef>)> {
    Ok((StatusCode::OK, Json(Chef::from_model(identity.chef))))
}

fn session_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Current session")
        .description("Returns the chef associated with the presented session token.")
        .response::<200, Json<Chef>>()
        .response::<401, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with all authentication-related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::{get_with, post_with};

    ApiRouter::new()
        .api_route("/auth/register", post_with(register, register_docs))
        .api_route("/auth/login", post_with(login, login_docs))
        .api_route("/auth/logout", post_with(logout, logout_docs))
        .api_route("/auth/session", get_with(session, session_docs))
}
