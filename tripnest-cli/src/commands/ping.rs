use anyhow::{Context, Result};
use clap::Args;
use tripnest_server::{PgSpotStore, SpotStore};

/// Arguments for the ping command
#[derive(Args, Debug)]
pub struct PingArgs {}

/// Round-trip to the document store
pub async fn run_ping(_args: PingArgs) -> Result<()> {
    let pool = super::connect().await?;
    let store = PgSpotStore::new(pool.clone());
    let result = store.ping().await.context("Failed to ping document store");
    pool.close().await;
    result?;

    println!("Pinged your deployment. Successfully connected to the document store!");
    Ok(())
}
