use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::storage::{Repository, Storage};

use super::{
    body::repository_input,
    error::ApiError,
    models::{ErrorResponse, HealthResponse},
    AppState,
};

type ApiResult<T> = Result<T, ApiError>;

pub async fn health<S: Storage + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
) -> ApiResult<Json<HealthResponse>> {
    let uptime_secs = state.started_at.elapsed().map(|d| d.as_secs()).unwrap_or(0);
    let repositories = state.storage.count_repositories()?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs,
        repositories,
    }))
}

pub async fn list_repositories<S: Storage + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
) -> ApiResult<Json<Vec<Repository>>> {
    Ok(Json(state.storage.list_repositories()?))
}

pub async fn create_repository<S: Storage + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    let input = repository_input(&headers, &body)?;
    let repository = state.storage.create_repository(input)?;
    log::info!("📦 Created repository {}", repository.id);
    Ok((StatusCode::CREATED, Json(repository)))
}

pub async fn update_repository<S: Storage + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<Repository>> {
    let input = repository_input(&headers, &body)?;
    let repository = state.storage.update_repository(&id, input)?;
    log::info!("✏️ Updated repository {}", id);
    Ok(Json(repository))
}

pub async fn delete_repository<S: Storage + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.storage.delete_repository(&id)?;
    log::info!("🗑️ Deleted repository {}", id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn like_repository<S: Storage + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Repository>> {
    let repository = state.storage.like_repository(&id)?;
    log::debug!("Repository {} now has {} likes", id, repository.likes);
    Ok(Json(repository))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "endpoint not found".to_string(),
        }),
    )
}
