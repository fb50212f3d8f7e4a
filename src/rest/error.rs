use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::storage::StorageError;

use super::models::ErrorResponse;

pub const UNKNOWN_REPOSITORY_MESSAGE: &str = "Repository ID does not exist.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Repository ID does not exist.")]
    UnknownRepository,
    #[error("invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error("request body must be a JSON object or array")]
    UnsupportedBody,
    #[error("internal storage error")]
    Internal,
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::UnknownRepository(_) => ApiError::UnknownRepository,
            StorageError::Poisoned => {
                log::error!("Storage unavailable: {}", err);
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::UnknownRepository => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) | ApiError::UnsupportedBody => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
