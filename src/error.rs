//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` for every failure the backend can surface and implements
//! Axum's `IntoResponse` so handlers can return it directly as a JSON error
//! body.
//!
//! Error mappings:
//! - `BadRequest` → 400
//! - `Unauthorized` → 401, `Forbidden` → 403, `NotFound` → 404
//! - `Conflict` → 409 (stale or missing revision token on save)
//! - `NotText` → 422
//! - `NotConfigured`, `Internal` → 500
//! - `Upstream`, `Http`, `Tree` → 502

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::tree::TreeError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Malformed repository tree: {0}")]
    Tree(#[from] TreeError),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not a text file: {0}")]
    NotText(String),

    #[error("{0}")]
    NotConfigured(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Http(_) | AppError::Upstream { .. } | AppError::Tree(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotText(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotConfigured(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!("{}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        let cases = [
            (AppError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::Conflict("x".into()), StatusCode::CONFLICT),
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::NotText("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (
                AppError::NotConfigured("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Upstream {
                    status: 500,
                    message: "x".into(),
                },
                StatusCode::BAD_GATEWAY,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn tree_errors_are_bad_gateway() {
        let error: AppError = TreeError::InvalidPath {
            path: "a//b".into(),
            reason: "empty path segment",
        }
        .into();
        assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
        assert!(error.to_string().contains("a//b"));
    }
}
