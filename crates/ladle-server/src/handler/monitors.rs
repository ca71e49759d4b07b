//! System health monitoring handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use ladle_postgres::PgClient;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::HealthStatus;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "ladle_server::handler::monitors";

/// Reports service liveness and a snapshot of the connection pool.
///
/// Does not perform a database round-trip, so the endpoint stays cheap
/// enough for frequent polling.
#[tracing::instrument(skip_all)]
async fn health_status(
    State(pg_client): State<PgClient>,
) -> Result<(StatusCode, Json<HealthStatus>)> {
    let pool = pg_client.pool_status();

    tracing::debug!(
        target: TRACING_TARGET,
        pool_size = pool.size,
        pool_available = pool.available,
        "Health status requested",
    );

    let response = HealthStatus {
        is_healthy: true,
        pool_max_size: pool.max_size,
        pool_size: pool.size,
        pool_available: pool.available,
    };

    Ok((StatusCode::OK, Json(response)))
}

fn health_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Health check")
        .description("Reports service liveness and a connection pool snapshot.")
        .response::<200, Json<HealthStatus>>()
}

/// Returns a [`Router`] with all monitoring routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::get_with;

    ApiRouter::new().api_route("/health", get_with(health_status, health_status_docs))
}
