use crate::{cli, context, rest, storage::MemoryStorage};
use anyhow::Result;
use tokio_util::sync::CancellationToken;

pub struct App {
    pub ctx: context::Context,
    pub storage: MemoryStorage,
}

impl App {
    pub fn from_cli() -> Result<Self> {
        let cli = cli::parse();
        let ctx = context::Context::from_cli(&cli);

        crate::tracing::init(ctx.log_file.as_deref());
        log::info!("🚀 Starting repostore");
        if let Some(path) = ctx.log_file.as_deref() {
            log::info!("📝 Log file: {}", path.to_string_lossy());
        }

        Ok(Self::new(ctx, MemoryStorage::new()))
    }

    pub fn new(ctx: context::Context, storage: MemoryStorage) -> Self {
        Self { ctx, storage }
    }
}

pub async fn run_daemon(app: App) -> Result<()> {
    let shutdown = CancellationToken::new();

    let api_addr = app.ctx.api_listen;
    let rest_storage = app.storage.clone();
    let rest_shutdown = shutdown.clone();

    let mut rest_handle = tokio::spawn(async move {
        if let Err(e) = rest::serve(api_addr, rest_storage, rest_shutdown).await {
            log::error!("REST server error: {:#}", e);
        }
    });

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            log::info!("🧨 Ctrl-C received, shutting down");
        }
        _ = &mut rest_handle => {
            log::error!("REST task exited unexpectedly");
        },
    }

    shutdown.cancel();
    // a completed JoinHandle must not be polled again
    if !rest_handle.is_finished() {
        rest_handle.await?;
    }

    log::info!("✅ Shutdown complete");
    Ok(())
}

pub async fn run() -> Result<()> {
    let app = App::from_cli()?;
    run_daemon(app).await
}
