//! Unified error handling with consistent API response envelope.

use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error body in the API response envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Consistent JSON envelope for successful API responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a successful result in the envelope.
    pub fn success(data: T, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            data,
            message: message.into(),
        })
    }
}

/// Application error type mapping to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{message}: {cause}")]
    Internal { message: String, cause: String },

    #[error("{message}: {details}")]
    InternalWithDetails { message: String, details: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } | AppError::InternalWithDetails { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::BadRequest(msg) => ErrorBody {
                error: msg,
                details: None,
            },
            AppError::Internal { message, cause } => {
                tracing::error!(error = %cause, "{message}");
                ErrorBody {
                    error: message,
                    details: None,
                }
            }
            AppError::InternalWithDetails { message, details } => {
                tracing::error!(error = %details, "{message}");
                ErrorBody {
                    error: message,
                    details: Some(details),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Collapse any failure into a 500 carrying a fixed public message.
///
/// The underlying cause is logged but never returned to the client.
pub trait OrInternal<T> {
    fn or_internal(self, message: &str) -> Result<T, AppError>;

    /// Same as [`OrInternal::or_internal`], but echoes the cause as `details`.
    fn or_internal_with_details(self, message: &str) -> Result<T, AppError>;
}

impl<T, E: Display> OrInternal<T> for Result<T, E> {
    fn or_internal(self, message: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Internal {
            message: message.to_string(),
            cause: e.to_string(),
        })
    }

    fn or_internal_with_details(self, message: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::InternalWithDetails {
            message: message.to_string(),
            details: e.to_string(),
        })
    }
}
