//! High-level database client with async connection pooling.

use std::fmt;
use std::sync::Arc;

use deadpool::managed::Pool;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;

use crate::{PgConfig, PgConnection, PgError, PgResult, TRACING_TARGET_CONNECTION};

/// Managed connection pool over the async Postgres connection.
pub type ConnectionPool = Pool<AsyncDieselConnectionManager<PgConnection>>;

/// A connection checked out of the pool.
///
/// Dereferences to [`PgConnection`], so all repository traits are callable
/// on it directly.
///
/// [`PgConnection`]: crate::PgConnection
pub type PooledConnection = deadpool::managed::Object<AsyncDieselConnectionManager<PgConnection>>;

/// Connection pool status information.
#[derive(Debug, Clone)]
pub struct PgPoolStatus {
    /// Maximum number of connections in the pool
    pub max_size: usize,
    /// Current number of connections in the pool
    pub size: usize,
    /// Number of available connections
    pub available: usize,
    /// Number of requests waiting for connections
    pub waiting: usize,
}

impl PgPoolStatus {
    /// Returns the utilization percentage of the pool (0.0 to 1.0).
    #[inline]
    pub fn utilization(&self) -> f64 {
        if self.max_size == 0 {
            0.0
        } else {
            (self.size - self.available) as f64 / self.max_size as f64
        }
    }

    /// Returns whether the pool is under pressure (high utilization or waiting requests).
    #[inline]
    pub fn is_under_pressure(&self) -> bool {
        self.waiting > 0 || self.utilization() > 0.8
    }
}

/// High-level database client that manages connections.
///
/// This struct provides the main interface for database operations,
/// encapsulating connection pool management and configuration. Cloning is
/// cheap and shares the underlying pool.
#[derive(Clone)]
pub struct PgClient {
    inner: Arc<PgClientInner>,
}

/// Inner data for PgClient
struct PgClientInner {
    pool: ConnectionPool,
    config: PgConfig,
}

impl PgClient {
    /// Creates a new database client with the provided configuration.
    ///
    /// This will establish a connection pool; connections themselves are
    /// created lazily on first checkout.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the pool cannot
    /// be constructed.
    #[tracing::instrument(
        skip(config),
        target = TRACING_TARGET_CONNECTION,
        fields(database_url = %config.database_url_masked())
    )]
    pub fn new(config: PgConfig) -> PgResult<Self> {
        tracing::info!(target: TRACING_TARGET_CONNECTION, "Initializing database client");

        config.validate()?;

        let manager = AsyncDieselConnectionManager::new(&config.postgres_url);
        let pool = Pool::builder(manager)
            .max_size(config.postgres_max_connections as usize)
            .wait_timeout(Some(config.connection_timeout()))
            .create_timeout(Some(config.connection_timeout()))
            .recycle_timeout(Some(config.idle_timeout()))
            .runtime(deadpool::Runtime::Tokio1)
            .build()
            .map_err(|e| {
                tracing::error!(
                    target: TRACING_TARGET_CONNECTION,
                    error = %e,
                    "Failed to create connection pool"
                );
                PgError::Config(e.to_string())
            })?;

        Ok(Self {
            inner: Arc::new(PgClientInner { pool, config }),
        })
    }

    /// Checks a connection out of the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool is exhausted, closed, or a new
    /// connection cannot be established.
    pub async fn get_connection(&self) -> PgResult<PooledConnection> {
        self.inner.pool.get().await.map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET_CONNECTION,
                error = %e,
                "Failed to acquire database connection"
            );
            PgError::from(e)
        })
    }

    /// Returns the configuration the client was built with.
    pub fn config(&self) -> &PgConfig {
        &self.inner.config
    }

    /// Returns a snapshot of the connection pool status.
    pub fn pool_status(&self) -> PgPoolStatus {
        let status = self.inner.pool.status();
        PgPoolStatus {
            max_size: status.max_size,
            size: status.size,
            available: status.available,
            waiting: status.waiting,
        }
    }
}

impl fmt::Debug for PgClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgClient")
            .field("config", &self.inner.config)
            .field("pool", &self.pool_status())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_without_connecting() {
        // Pool creation is lazy; no database needs to be reachable.
        let client = PgClient::new(PgConfig::default()).expect("pool builds");
        let status = client.pool_status();
        assert_eq!(status.size, 0);
        assert_eq!(status.max_size, 10);
        assert!(!status.is_under_pressure());
    }

    #[test]
    fn client_rejects_invalid_config() {
        let mut config = PgConfig::default();
        config.postgres_max_connections = 0;
        assert!(PgClient::new(config).is_err());
    }

    #[test]
    fn pool_status_utilization() {
        let status = PgPoolStatus {
            max_size: 10,
            size: 5,
            available: 2,
            waiting: 0,
        };
        assert!((status.utilization() - 0.3).abs() < f64::EPSILON);
        assert!(!status.is_under_pressure());

        let busy = PgPoolStatus {
            max_size: 10,
            size: 10,
            available: 0,
            waiting: 3,
        };
        assert!(busy.is_under_pressure());
    }
}
