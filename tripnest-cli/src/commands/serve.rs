//! Serve command - runs the HTTP API

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tripnest_server::config::DEFAULT_PORT;
use tripnest_server::store::ensure_schema;
use tripnest_server::{run_server, MemorySpotStore, PgSpotStore, ServerConfig, SpotStore};

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, short = 'b', env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Use an in-memory collection instead of PostgreSQL (data is lost on exit)
    #[arg(long)]
    pub memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.bind, args.port),
    };

    if args.memory {
        tracing::warn!("Using in-memory store - nothing is persisted");
        run_server(Arc::new(MemorySpotStore::new()), config)
            .await
            .context("Server error")?;
        return Ok(());
    }

    let pool = super::connect().await?;
    ensure_schema(&pool)
        .await
        .context("Failed to prepare schema")?;

    let store = PgSpotStore::new(pool.clone());
    store
        .ping()
        .await
        .context("Failed to ping document store")?;
    tracing::info!("Pinged your deployment. Successfully connected to the document store!");

    // Run server (blocks until shutdown), then release the pool either way
    let result = run_server(Arc::new(store), config).await;
    pool.close().await;
    tracing::info!("Database pool closed");

    result.context("Server error")?;
    Ok(())
}
