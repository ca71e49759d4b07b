//! Command-line configuration.

use std::net::SocketAddr;

use clap::Parser;
use ladle_server::service::ServiceConfig;

/// Ladle recipe platform API server.
#[derive(Debug, Parser)]
#[command(name = "ladle", version, about)]
pub struct Cli {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "LADLE_BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// Skip running pending database migrations on startup.
    #[arg(long, env = "LADLE_SKIP_MIGRATIONS")]
    pub skip_migrations: bool,

    /// Service configuration.
    #[command(flatten)]
    pub service: ServiceConfig,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_parse() {
        let cli = Cli::parse_from(["ladle", "--postgres-url", "postgresql://localhost/ladle"]);
        assert_eq!(cli.bind_addr.port(), 8080);
        assert!(!cli.skip_migrations);
    }
}
