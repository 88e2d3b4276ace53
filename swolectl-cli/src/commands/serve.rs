//! HTTP server command for the swolectl API

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser};

use swolectl_server::db::{acquire, create_lazy_pool, schema, PoolConfig};
use swolectl_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5001)
    #[arg(long, short = 'b', env = "SWOLECTL_BIND", default_value = "127.0.0.1:5001")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Create the members and sessions tables before serving
    #[arg(long)]
    pub init_db: bool,
}

/// Database connection arguments shared by commands
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,

    /// Seconds a request waits for a free connection
    #[arg(long, default_value_t = 5)]
    pub acquire_timeout: u64,
}

impl DatabaseArgs {
    pub fn database_url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")
    }

    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args.database.database_url()?;

    tracing::info!("Starting swolectl server on {}", args.bind);

    // Lazy pool: requests report service_unavailable while the database is down
    let pool = create_lazy_pool(database_url, &args.database.pool_config())
        .context("Invalid database URL")?;

    if args.init_db {
        schema::bootstrap(&pool)
            .await
            .context("Failed to create tables")?;
    } else if let Err(e) = acquire(&pool).await {
        tracing::warn!("Database not reachable yet: {}", e);
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
