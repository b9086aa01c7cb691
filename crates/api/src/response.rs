//! Shared response body types for API handlers.

use campus_core::types::DbId;
use serde::Serialize;

/// Acknowledgement body for mutations: `{ "message": ... }`.
///
/// Creates also report the assigned `id`; the stored record itself is never
/// echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }

    pub fn with_id(message: impl Into<String>, id: DbId) -> Self {
        Self {
            message: message.into(),
            id: Some(id),
        }
    }
}
