#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use campus_api::config::ServerConfig;
use campus_api::router::build_app_router;
use campus_api::state::AppState;
use campus_core::resource::{Circular, ResourceKind};
use campus_db::repositories::MemoryRecordRepo;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3500` as CORS origin (matching the dev default),
/// a 30-second request timeout and a static directory that does not exist.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3500".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        static_dir: "tests/no-such-public-dir".to_string(),
        database_url: None,
        db_max_connections: 1,
    }
}

/// Build the full application router backed by a fresh in-memory store.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack. Clone the returned router to send several
/// requests against the same store.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState::new(
        config.clone(),
        Arc::new(MemoryRecordRepo::new(Circular::COLLECTION)),
    );
    build_app_router(state, &config)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
