use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::auth::SessionError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("login required")]
    Unauthorized,

    #[error("field '{field}' must be a finite number, got {value}")]
    InvalidField { field: &'static str, value: String },

    #[error("field '{field}' = {value} drives the model outside the representable range")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    SessionStore(#[from] SessionError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InvalidField { .. }
            | ApiError::OutOfRange { .. }
            | ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::SessionStore(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::InvalidField { .. } | ApiError::OutOfRange { .. } => "INVALID_FIELD",
            ApiError::InvalidRequest(_) => "INVALID_REQUEST",
            ApiError::SessionStore(_) => "STORE_ERROR",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        let details = match &self {
            ApiError::InvalidField { field, .. } | ApiError::OutOfRange { field, .. } => {
                Some(vec![field.to_string()])
            }
            _ => None,
        };
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.to_string(),
                details,
            },
        };
        (status, Json(body)).into_response()
    }
}
