//! Handlers for record resources (e.g. `/circulars`).
//!
//! Generic over the resource kind: each route module instantiates them with
//! a concrete kind whose service is reachable from `AppState` via `FromRef`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::resource::ResourceKind;
use campus_db::models::record::{CreateRecord, Record, UpdateRecord};

use crate::crud::CrudService;
use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::response::MessageResponse;

/// GET /api/v1/{resource}/scope/{scope_key}
pub async fn list_by_scope<K: ResourceKind>(
    State(service): State<Arc<CrudService<K>>>,
    Path(scope_key): Path<String>,
) -> AppResult<Json<Vec<Record>>> {
    let records = service.list_by_scope(&scope_key).await?;
    Ok(Json(records))
}

/// GET /api/v1/{resource}/scope
///
/// The scope segment is absent; always a bad request.
pub async fn list_without_scope<K: ResourceKind>(
    State(service): State<Arc<CrudService<K>>>,
) -> AppResult<Json<Vec<Record>>> {
    let records = service.list_by_scope("").await?;
    Ok(Json(records))
}

/// GET /api/v1/{resource}/{id}
pub async fn get_by_id<K: ResourceKind>(
    State(service): State<Arc<CrudService<K>>>,
    Path(id): Path<String>,
) -> AppResult<Json<Record>> {
    let record = service.get_by_id(&id).await?;
    Ok(Json(record))
}

/// POST /api/v1/{resource}
pub async fn create<K: ResourceKind>(
    State(service): State<Arc<CrudService<K>>>,
    JsonBody(input): JsonBody<CreateRecord>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let ack = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(ack)))
}

/// PATCH /api/v1/{resource}/{id}
pub async fn update<K: ResourceKind>(
    State(service): State<Arc<CrudService<K>>>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdateRecord>,
) -> AppResult<Json<MessageResponse>> {
    let ack = service.update(&id, input).await?;
    Ok(Json(ack))
}

/// DELETE /api/v1/{resource}/{id}
pub async fn delete<K: ResourceKind>(
    State(service): State<Arc<CrudService<K>>>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let ack = service.delete(&id).await?;
    Ok(Json(ack))
}
