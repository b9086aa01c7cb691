pub mod health;
pub mod records;

use axum::Router;
use campus_core::resource::Circular;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /circulars                                       create (POST)
/// /circulars/scope/{scope_key}                     list by paper/department (GET)
/// /circulars/{id}                                  get, update (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Circulars: notices scoped to a paper or department.
        .nest("/circulars", records::router::<Circular>())
}
