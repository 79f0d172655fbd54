use anyhow::{Context, Result};
use clap::Args;
use tripnest_server::store::ensure_schema;

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {}

/// Create the collection schema and exit
pub async fn run_migrate(_args: MigrateArgs) -> Result<()> {
    let pool = super::connect().await?;
    let result = ensure_schema(&pool).await.context("Failed to prepare schema");
    pool.close().await;
    result?;

    println!("Schema ready");
    Ok(())
}
