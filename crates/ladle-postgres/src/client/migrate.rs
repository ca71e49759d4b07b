//! Embedded database migrations.

use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::MigrationHarness;
use tokio::task::spawn_blocking;

use crate::{MIGRATIONS, PgClient, PgError, PgResult, TRACING_TARGET_MIGRATION};

/// Runs all pending migrations on the database.
///
/// Migrations are embedded into the binary at compile time. The harness is
/// synchronous, so the checked-out connection is wrapped and driven on a
/// blocking task.
///
/// Returns the versions of the migrations that were applied.
#[tracing::instrument(skip(client), target = TRACING_TARGET_MIGRATION)]
pub async fn run_pending_migrations(client: &PgClient) -> PgResult<Vec<String>> {
    tracing::info!(
        target: TRACING_TARGET_MIGRATION,
        "Starting database migration process",
    );

    let conn = client.get_connection().await?;
    let mut conn: AsyncConnectionWrapper<_> = conn.into();

    let versions = spawn_blocking(move || {
        conn.run_pending_migrations(MIGRATIONS).map(|versions| {
            versions
                .into_iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
        })
    })
    .await
    .map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_MIGRATION,
            error = %err,
            "Migration task panicked, join error occurred"
        );
        PgError::Migration(err.into())
    })?
    .map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_MIGRATION,
            error = %err,
            "Database migration process failed"
        );
        PgError::Migration(err)
    })?;

    tracing::info!(
        target: TRACING_TARGET_MIGRATION,
        migrations_count = versions.len(),
        "Database migration process completed successfully"
    );

    Ok(versions)
}
