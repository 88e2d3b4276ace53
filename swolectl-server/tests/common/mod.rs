//! Shared helpers for router-level tests

#![allow(dead_code)]

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use swolectl_server::{build_router, create_lazy_pool, AppState, PoolConfig, ServerConfig};

/// Pool pointing at a port nothing listens on.
pub fn unreachable_pool() -> PgPool {
    let config = PoolConfig {
        max_connections: 1,
        acquire_timeout: Duration::from_millis(300),
    };
    create_lazy_pool("postgres://swolectl@127.0.0.1:1/swolectl", &config)
        .expect("url should parse")
}

pub fn app(pool: PgPool) -> Router {
    build_router(AppState::new(pool), &ServerConfig::default())
}

/// Send a request and decode the body as JSON (or a JSON string for text).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&Value>) -> (StatusCode, Value) {
    let raw = body.map(Value::to_string);
    send_raw(app, method, uri, raw.as_deref()).await
}

pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let (status, text) = send_text(app, method, uri, body).await;
    let value = serde_json::from_str(&text).unwrap_or(Value::String(text));
    (status, value)
}

/// Send a request and return the body text exactly as the server wrote it.
pub async fn send_text(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(raw) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw.to_owned())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");

    (status, String::from_utf8_lossy(&bytes).into_owned())
}
