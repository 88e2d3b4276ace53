//! swolectl CLI - Fitness tracker service
//!
//! Entry point for the `swolectl` binary:
//! - `serve`: run the HTTP API for members and workout sessions
//! - `init-db`: create the members and sessions tables

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "swolectl",
    author,
    version,
    about = "Fitness tracker service for gym members and their workout sessions"
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
    /// Run HTTP API server (members, workout sessions)
    Serve(commands::serve::ServeArgs),
    /// Create the members and sessions tables if missing
    InitDb(commands::init_db::InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; explicit env vars and flags still apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
    }

    Ok(())
}
