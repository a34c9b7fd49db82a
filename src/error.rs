// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;

/// Every handler failure, mapped to a status code in one place.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotConfigured(String),

    /// An external call failed. Only `message` reaches the client.
    #[error("{message}")]
    Upstream {
        message: &'static str,
        cause: anyhow::Error,
    },
}

impl AppError {
    pub fn upstream(message: &'static str, cause: anyhow::Error) -> Self {
        Self::Upstream { message, cause }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotConfigured(_) | AppError::Upstream { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Upstream { message, cause } => {
                tracing::error!(error = ?cause, "{}", message);
            }
            AppError::NotConfigured(msg) => tracing::error!("{}", msg),
            AppError::BadRequest(msg) => tracing::debug!("rejected request: {}", msg),
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
