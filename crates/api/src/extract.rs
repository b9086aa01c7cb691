//! Request extractors whose rejections use the API's error format.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with rejections (malformed JSON, wrong content type) turned
/// into [`AppError::BadRequest`] instead of Axum's plain-text responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
