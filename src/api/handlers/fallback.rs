//! Handlers for requests no route accepts.

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Answers paths that match no route with a JSON 404.
pub async fn not_found_handler(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, path = %uri.path(), "No route matched");
    AppError::RouteNotFound
}

/// Answers known paths requested with an unsupported method.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
