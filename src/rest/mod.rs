use std::net::SocketAddr;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::storage::Storage;

mod body;
mod error;
mod guard;
mod handlers;
mod models;

pub use error::{ApiError, UNKNOWN_REPOSITORY_MESSAGE};
pub use models::{ErrorResponse, HealthResponse};

use guard::require_repository;
use handlers::{
    create_repository, delete_repository, health, like_repository, list_repositories, not_found,
    update_repository,
};

#[derive(Clone)]
pub struct AppState<S: Storage> {
    pub storage: S,
    pub started_at: std::time::SystemTime,
}

/// Builds the full HTTP surface over `storage`.
///
/// Routes addressed by `:id` sit behind [`require_repository`], so an unknown id is
/// answered with 400 before any handler or body extractor runs.
pub fn router<S: Storage + Clone + Send + Sync + 'static>(storage: S) -> Router {
    let state = AppState {
        storage,
        started_at: std::time::SystemTime::now(),
    };

    let by_id = Router::new()
        .route(
            "/repositories/:id",
            put(update_repository::<S>).delete(delete_repository::<S>),
        )
        .route("/repositories/:id/like", post(like_repository::<S>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_repository::<S>,
        ));

    Router::new()
        .route("/health", get(health::<S>))
        .route(
            "/repositories",
            get(list_repositories::<S>).post(create_repository::<S>),
        )
        .merge(by_id)
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO)),
        )
        .with_state(state)
}

pub async fn serve<S: Storage + Clone + Send + Sync + 'static>(
    addr: SocketAddr,
    storage: S,
    shutdown: tokio_util::sync::CancellationToken,
) -> anyhow::Result<()> {
    let app = router(storage);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("🌐 REST listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            log::info!("🛑 REST shutdown requested");
        })
        .await?;
    log::info!("👋 REST server exited");
    Ok(())
}
