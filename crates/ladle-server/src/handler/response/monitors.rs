//! Health monitoring response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response for the health endpoint.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// Whether the service considers itself healthy.
    pub is_healthy: bool,
    /// Maximum size of the database connection pool.
    pub pool_max_size: usize,
    /// Connections currently held by the pool.
    pub pool_size: usize,
    /// Connections available for checkout.
    pub pool_available: usize,
}
