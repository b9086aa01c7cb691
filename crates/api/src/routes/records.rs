//! Route definitions shared by record resources.

use std::sync::Arc;

use axum::extract::FromRef;
use axum::routing::{get, post};
use axum::Router;
use campus_core::resource::ResourceKind;

use crate::crud::CrudService;
use crate::handlers::records;
use crate::state::AppState;

/// Routes for one record resource, mounted at e.g. `/circulars`.
///
/// ```text
/// POST   /                                         -> create
/// GET    /scope                                    -> list_without_scope (400)
/// GET    /scope/{scope_key}                        -> list_by_scope
/// GET    /{id}                                     -> get_by_id
/// PATCH  /{id}                                     -> update
/// DELETE /{id}                                     -> delete
/// ```
pub fn router<K: ResourceKind>() -> Router<AppState>
where
    Arc<CrudService<K>>: FromRef<AppState>,
{
    Router::new()
        .route("/", post(records::create::<K>))
        .route("/scope", get(records::list_without_scope::<K>))
        .route("/scope/{scope_key}", get(records::list_by_scope::<K>))
        .route(
            "/{id}",
            get(records::get_by_id::<K>)
                .patch(records::update::<K>)
                .delete(records::delete::<K>),
        )
}
