use std::sync::Arc;

use axum::extract::FromRef;
use campus_core::resource::Circular;
use campus_db::repositories::RecordRepository;

use crate::config::ServerConfig;
use crate::crud::CrudService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). `FromRef` lets
/// handlers extract a single resource service directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Circular records.
    pub circulars: Arc<CrudService<Circular>>,
}

impl AppState {
    /// Wire each resource service to its store.
    pub fn new(config: ServerConfig, circulars: Arc<dyn RecordRepository>) -> Self {
        Self {
            config: Arc::new(config),
            circulars: Arc::new(CrudService::new(circulars)),
        }
    }
}
