use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Per-request failures. None of them touch the store.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Product not found: {id}")]
    NotFound { id: String },

    #[error("Malformed request body: {0}")]
    MalformedInput(String),

    #[error("Body id '{body_id}' does not match path id '{path_id}'")]
    IdMismatch { path_id: String, body_id: String },
}

impl ApiError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            ApiError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedInput(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::NotFound { .. } => tracing::debug!("{}", self),
            _ => tracing::warn!("Rejected request: {}", self),
        }
        // Error responses carry no body.
        status.into_response()
    }
}
