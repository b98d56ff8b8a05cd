//! # taskboardd: taskboard daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`taskboard.toml` plus env vars)
//! - Install the `tracing` subscriber
//! - Construct the selected repository implementations (memory or `SQLite`)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use taskboard_adapter_http_axum::router;
use taskboard_adapter_http_axum::state::AppState;
use taskboard_adapter_storage_memory::MemoryStore;
use taskboard_app::ports::{ProjectRepository, TaskRepository};

use crate::config::{Config, StorageBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter {:?}", config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, backend = %config.storage.backend, "taskboardd listening");

    match config.storage.backend {
        StorageBackend::Memory => {
            let store = MemoryStore::new();
            let state =
                AppState::from_repositories(store.project_repository(), store.task_repository());
            serve(listener, state, &config).await
        }
        StorageBackend::Sqlite => {
            let db = taskboard_adapter_storage_sqlite_sqlx::Config {
                database_url: config.storage.database_url.clone(),
            }
            .build()
            .await
            .context("failed to open the sqlite database")?;
            let state =
                AppState::from_repositories(db.project_repository(), db.task_repository());
            serve(listener, state, &config).await
        }
    }
}

async fn serve<PR, TR>(
    listener: TcpListener,
    state: AppState<PR, TR>,
    config: &Config,
) -> anyhow::Result<()>
where
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
{
    let app = router::with_cors(router::build(state), &config.http.cors_allowed_origins);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server failed")?;

    tracing::info!("taskboardd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
