//! Subcommand implementations

mod migrate;
mod ping;
mod serve;

use anyhow::{Context, Result};
use tripnest_server::store::{create_pool, PgPool};
use tripnest_server::StoreConfig;

pub use migrate::{run_migrate, MigrateArgs};
pub use ping::{run_ping, PingArgs};
pub use serve::{run_serve, ServeArgs};

/// Build the store pool from `DB_*` environment variables.
///
/// Fails before touching the network when credentials are missing.
async fn connect() -> Result<PgPool> {
    let config = StoreConfig::from_env().context("Cannot start without database credentials")?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        "Connecting to document store"
    );

    create_pool(&config)
        .await
        .context("Failed to create database pool")
}
