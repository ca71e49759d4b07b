//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod authentication;
mod chefs;
mod error;
mod ingredients;
mod monitors;
mod recipes;
pub mod request;
pub mod response;

use aide::axum::ApiRouter;
use aide::openapi::{Info, OpenApi};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::service::ServiceState;

#[inline]
async fn fallback() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Serves the generated OpenAPI document.
async fn serve_openapi(Extension(api): Extension<OpenApi>) -> Json<OpenApi> {
    Json(api)
}

/// Returns a [`Router`] with all routes and the given state applied.
///
/// The generated OpenAPI document is served at `/api.json`.
pub fn routes(state: ServiceState) -> Router {
    let mut api = OpenApi {
        info: Info {
            title: "Ladle API".to_owned(),
            summary: Some("Recipe management platform".to_owned()),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            ..Info::default()
        },
        ..OpenApi::default()
    };

    ApiRouter::new()
        .merge(authentication::routes())
        .merge(chefs::routes())
        .merge(ingredients::routes())
        .merge(recipes::routes())
        .merge(monitors::routes())
        .route("/api.json", get(serve_openapi))
        .fallback(fallback)
        .finish_api(&mut api)
        .layer(Extension(api))
        .with_state(state)
}

#[cfg(test)]
mod test {
    use axum_test::TestServer;

    use crate::handler::routes;
    use crate::service::{ServiceConfig, ServiceState};

    /// Returns a new [`TestServer`] over the full route tree.
    ///
    /// The connection pool is constructed lazily, so routes that do not
    /// touch the database are exercisable without one.
    fn create_test_server() -> anyhow::Result<TestServer> {
        let config = ServiceConfig::default();
        let state = ServiceState::from_config(&config)?;
        Ok(TestServer::new(routes(state))?)
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["isHealthy"], true);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_routes_fall_back_to_not_found() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/soups").await;
        response.assert_status_not_found();

        let body: serde_json::Value = response.json();
        assert_eq!(body["name"], "not_found");
        Ok(())
    }

    #[tokio::test]
    async fn session_endpoint_rejects_unknown_token() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .get("/auth/session")
            .add_header("authorization", "Bearer never-issued")
            .await;
        response.assert_status_unauthorized();

        let body: serde_json::Value = response.json();
        assert_eq!(body["name"], "unauthorized");
        Ok(())
    }

    #[tokio::test]
    async fn session_endpoint_requires_a_token() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/auth/session").await;
        response.assert_status_unauthorized();

        let body: serde_json::Value = response.json();
        assert_eq!(body["name"], "missing_auth_token");
        Ok(())
    }

    #[tokio::test]
    async fn logout_is_idempotent() -> anyhow::Result<()> {
        let server = create_test_server()?;

        // A bare token and the Bearer form are both accepted; neither has a
        // live session, and logout still reports success each time.
        let first = server
            .post("/auth/logout")
            .add_header("authorization", "Bearer stale-token")
            .await;
        first.assert_status_ok();

        let second = server
            .post("/auth/logout")
            .add_header("authorization", "stale-token")
            .await;
        second.assert_status_ok();

        let body: serde_json::Value = second.json();
        assert_eq!(body["message"], "Logout successful");
        Ok(())
    }

    #[tokio::test]
    async fn logout_without_header_is_ok() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.post("/auth/logout").await;
        response.assert_status_ok();
        Ok(())
    }

    #[tokio::test]
    async fn openapi_document_is_served() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/api.json").await;
        response.assert_status_ok();
        Ok(())
    }
}
