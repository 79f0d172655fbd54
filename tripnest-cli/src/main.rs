//! tripnest CLI - runs the tourist spot REST API
//!
//! Subcommands:
//! - `serve`: connect to the store and serve HTTP until shutdown
//! - `migrate`: create the collection schema and exit
//! - `ping`: check that the store is reachable

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::{MigrateArgs, PingArgs, ServeArgs};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "tripnest",
    author,
    version,
    about = "REST API for tourist spots backed by a document collection"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the REST API
    Serve(ServeArgs),
    /// Create the tourist spot schema if missing
    Migrate(MigrateArgs),
    /// Check connectivity to the document store
    Ping(PingArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; real environment variables still apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::Ping(args) => commands::run_ping(args).await?,
    }
    Ok(())
}
