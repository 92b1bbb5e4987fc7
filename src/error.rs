//! Application error taxonomy and its HTTP mapping.
//!
//! Every failure a handler can return is an [`AppError`]. Client-facing
//! variants carry a stable status code and message; internal faults are
//! logged and rendered as an opaque `500`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// Message returned to clients for any internal fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid URL format")]
    InvalidUrl,

    #[error("Invalid shortcode: Must be alphanumeric, 3-10 characters")]
    InvalidShortcode,

    #[error("Shortcode already in use")]
    ShortcodeConflict,

    /// Random generation kept colliding with existing shortcodes.
    #[error("Failed to generate a unique shortcode after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("Shortcode not found")]
    NotFound,

    #[error("Shortcode expired")]
    Expired,

    /// No route matches the request path.
    #[error("Route not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Malformed request body or out-of-range field.
    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl | AppError::InvalidShortcode | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::ShortcodeConflict => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Expired => StatusCode::GONE,
            AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::GenerationExhausted { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns true for faults whose detail must not reach the client.
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// The message exposed in the response body.
    pub fn client_message(&self) -> String {
        if self.is_internal() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!(error = %self, "Request failed with internal error");
        }

        let body = ErrorBody {
            error: self.client_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let reason = errs
                    .iter()
                    .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{field}: {reason}")
            })
            .collect::<Vec<_>>()
            .join(", ");

        AppError::Validation(format!("Invalid request: {message}"))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        if rejection.status().is_server_error() {
            AppError::Internal(rejection.body_text())
        } else {
            AppError::Validation(format!("Invalid path: {}", rejection.body_text()))
        }
    }
}
