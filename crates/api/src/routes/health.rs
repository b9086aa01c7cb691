//! `GET /health`: liveness plus the state of each resource's record store.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use campus_core::resource::{Circular, ResourceKind};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when every store answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub stores: Vec<StoreHealth>,
}

/// Health of the store behind one resource collection.
#[derive(Serialize)]
pub struct StoreHealth {
    pub collection: &'static str,
    /// `postgres` or `memory`.
    pub backend: &'static str,
    pub healthy: bool,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let stores = vec![StoreHealth {
        collection: Circular::COLLECTION,
        backend: state.circulars.store_backend(),
        healthy: state.circulars.ping().await,
    }];

    let status = if stores.iter().all(|s| s.healthy) {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        stores,
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
