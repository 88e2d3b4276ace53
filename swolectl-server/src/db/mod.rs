//! Database layer - connection pool, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no shared nullable connection
//! - One borrowed connection per operation, returned on drop
//! - Parameters are always bound, never formatted into SQL
//! - Transactions for multi-step operations (member cascade delete)

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{acquire, create_lazy_pool, create_pool, PoolConfig};
pub use repos::*;
