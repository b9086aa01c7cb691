//! Health check and catch-all routing tests.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use campus_api::router::build_app_router;
use campus_api::state::AppState;
use campus_core::types::DbId;
use campus_db::models::record::{NewRecord, Record, RecordMatcher};
use campus_db::repositories::{RecordRepository, StoreError, StoreResult};
use common::{body_json, get, send};

/// A store whose every call fails, as if the database were down.
struct UnreachableRepo;

fn unreachable() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl RecordRepository for UnreachableRepo {
    async fn find_by_scope(&self, _: &str) -> StoreResult<Vec<Record>> {
        Err(unreachable())
    }
    async fn find_by_id(&self, _: DbId) -> StoreResult<Option<Record>> {
        Err(unreachable())
    }
    async fn find_one(&self, _: &RecordMatcher) -> StoreResult<Option<Record>> {
        Err(unreachable())
    }
    async fn insert(&self, _: &NewRecord) -> StoreResult<Record> {
        Err(unreachable())
    }
    async fn save(&self, _: &Record) -> StoreResult<Option<Record>> {
        Err(unreachable())
    }
    async fn remove(&self, _: DbId) -> StoreResult<bool> {
        Err(unreachable())
    }
    async fn ping(&self) -> StoreResult<()> {
        Err(unreachable())
    }
    fn backend(&self) -> &'static str {
        "postgres"
    }
}

#[tokio::test]
async fn health_check_reports_memory_store() {
    let app = common::build_test_app();
    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["stores"][0]["collection"], "circulars");
    assert_eq!(json["stores"][0]["backend"], "memory");
    assert_eq!(json["stores"][0]["healthy"], true);
}

#[tokio::test]
async fn health_check_is_degraded_when_store_is_down() {
    let config = common::test_config();
    let app = build_app_router(AppState::new(config.clone(), Arc::new(UnreachableRepo)), &config);

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["stores"][0]["backend"], "postgres");
    assert_eq!(json["stores"][0]["healthy"], false);

    // Store failures on record routes are sanitized 500s.
    let response = get(&app, "/api/v1/circulars/1").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "An internal error occurred");
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = common::build_test_app();
    let response = get(&app, "/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn unknown_path_returns_json_404() {
    let app = common::build_test_app();
    let response = get(&app, "/api/v1/no-such-resource").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["message"], "404 Not Found");
    assert_eq!(json["details"], "No paths found");
}

#[tokio::test]
async fn unknown_path_with_post_returns_json_404() {
    let app = common::build_test_app();
    let response = send(&app, Method::POST, "/nowhere", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "404 Not Found");
}

#[tokio::test]
async fn wrong_method_on_known_path_returns_json_405() {
    let app = common::build_test_app();

    for (method, uri) in [
        (Method::PUT, "/api/v1/circulars/1"),
        (Method::DELETE, "/api/v1/circulars/scope/CS101"),
        (Method::POST, "/health"),
    ] {
        let response = send(&app, method.clone(), uri, None).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");

        let json = body_json(response).await;
        assert_eq!(json["code"], "METHOD_NOT_ALLOWED");
        assert_eq!(json["message"], format!("Method {method} not allowed on this path"));
    }
}
