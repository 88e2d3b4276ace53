//! Create the swolectl tables in an existing database

use anyhow::{Context, Result};
use clap::Parser;

use swolectl_server::db::{create_pool, schema};

use super::serve::DatabaseArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Connect and create the members and sessions tables if missing
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let database_url = args.database.database_url()?;

    let pool = create_pool(database_url, &args.database.pool_config())
        .await
        .context("Failed to connect to database")?;

    schema::bootstrap(&pool)
        .await
        .context("Failed to create tables")?;

    println!("members and sessions tables are ready");
    Ok(())
}
