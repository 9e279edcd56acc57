//! Startup helpers for the vCon server.

use std::process::ExitCode;
use std::sync::Arc;

use crate::server::{self, AppState, ServerConfig, ServerError, ServerResult};

/// Run the server until Ctrl+C (used by the `vcon-server` binary).
///
/// # Returns
/// `ExitCode::SUCCESS` on graceful shutdown, `1` on failure.
#[must_use]
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting vCon server v{}", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::from_env();
    let state = initialize();

    exit_code(&serve(state, config))
}

/// Map the outcome of a server run to the process exit code, logging failures.
fn exit_code(result: &ServerResult<()>) -> ExitCode {
    match result {
        Ok(()) => {
            tracing::info!("vCon server stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(1)
        }
    }
}

/// Build application state over the built-in records.
#[must_use]
pub fn initialize() -> Arc<AppState> {
    let state = AppState::seeded();
    tracing::info!("Loaded {} vCon record(s)", state.store.all().len());
    state
}

fn serve(state: Arc<AppState>, config: ServerConfig) -> ServerResult<()> {
    let rt = tokio::runtime::Runtime::new().map_err(ServerError::Runtime)?;
    rt.block_on(server::run_server_with_shutdown(
        state,
        config.addr(),
        shutdown_signal(),
    ))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Ctrl+C handler failed, running until killed: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
