use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::http::envelope::Envelope;

/// Errores estructurales de la API (fuera del motor de render).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("missing required parameter: job")]
    MissingJob,
    #[error("invalid job name: {0}")]
    InvalidJob(String),
    #[error("no read permission for job: {0}")]
    Forbidden(String),
    #[error("job not found: {0}")]
    NotFound(String),
    #[error("parameter '{parameter}' not found in job {job}")]
    ParameterNotFound { job: String, parameter: String },
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingJob | ApiError::InvalidJob(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) | ApiError::ParameterNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        } else {
            tracing::debug!("request rejected ({status}): {self}");
        }
        (status, Json(Envelope::<()>::failure(self.to_string()))).into_response()
    }
}
