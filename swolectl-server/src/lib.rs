//! swolectl-server: HTTP service for gym members and their workout sessions
//!
//! Request bodies are validated into typed payloads (`models`), written with
//! bound parameters through per-entity repositories (`db`), and rendered as
//! key-ordered JSON (`http`). Deleting a member removes its sessions in the
//! same transaction.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_lazy_pool, create_pool, DbError, PoolConfig};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
