//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Every repository
//! operation borrows exactly one connection via [`acquire`]; the
//! `PoolConnection` guard hands it back to the pool when dropped, on every
//! exit path.

use std::time::Duration;

use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};

use super::repos::DbError;

/// Default maximum connections for the pool.
/// Kept low for a single gym's front desk.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a connection before giving up.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool tuning knobs
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl PoolConfig {
    fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

/// Create a PostgreSQL connection pool, connecting eagerly.
///
/// # Errors
///
/// Returns an error if the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/swolectl", &PoolConfig::default()).await?;
/// ```
pub async fn create_pool(database_url: &str, config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    config.options().connect(database_url).await
}

/// Create a PostgreSQL connection pool without connecting.
///
/// Connections are opened on first use, so the server can start while the
/// database is down and report `service_unavailable` per request instead.
///
/// # Errors
///
/// Returns an error only if `database_url` cannot be parsed.
pub fn create_lazy_pool(database_url: &str, config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    config.options().connect_lazy(database_url)
}

/// Borrow one connection from the pool.
///
/// Failure to obtain a connection is reported as [`DbError::Unavailable`],
/// distinct from failures of statements run on an acquired connection.
pub async fn acquire(pool: &PgPool) -> Result<PoolConnection<Postgres>, DbError> {
    pool.acquire().await.map_err(DbError::Unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PoolConfig::default();
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn unreachable_database_is_unavailable() {
        let config = PoolConfig {
            max_connections: 1,
            acquire_timeout: Duration::from_millis(500),
        };
        let pool = create_lazy_pool("postgres://swolectl@127.0.0.1:1/swolectl", &config)
            .expect("url should parse");

        let err = acquire(&pool).await.unwrap_err();
        assert!(matches!(err, DbError::Unavailable(_)));
    }

    #[test]
    fn lazy_pool_rejects_bad_url() {
        let result = create_lazy_pool("not a url", &PoolConfig::default());
        assert!(result.is_err());
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p swolectl-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, &PoolConfig::default())
            .await
            .expect("pool creation failed");

        let mut conn = acquire(&pool).await.expect("acquire failed");
        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&mut *conn)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
