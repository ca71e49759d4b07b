//! Service configuration.

#[cfg(feature = "config")]
use clap::Args;
use ladle_postgres::{PgClient, PgConfig, PgResult};
use serde::{Deserialize, Serialize};

/// Configuration for all services the server depends on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "configurations do nothing unless used to build state"]
pub struct ServiceConfig {
    /// PostgreSQL connection and pool settings.
    #[cfg_attr(feature = "config", command(flatten))]
    #[serde(flatten)]
    pub postgres: PgConfig,
}

impl ServiceConfig {
    /// Builds the database client from the postgres settings.
    ///
    /// The pool is constructed eagerly; connections are established lazily
    /// on first checkout.
    pub fn connect_postgres(&self) -> PgResult<PgClient> {
        PgClient::new(self.postgres.clone())
    }
}
