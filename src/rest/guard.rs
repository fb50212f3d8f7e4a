use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::storage::Storage;

use super::{error::ApiError, AppState};

/// Rejects requests addressed to a repository id that is not stored.
pub async fn require_repository<S: Storage + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    request: Request,
    next: Next,
) -> Response {
    match state.storage.contains_repository(&id) {
        Ok(true) => next.run(request).await,
        Ok(false) => {
            log::warn!("Unknown repository id {}", id);
            ApiError::UnknownRepository.into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}
