use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use hookfeed_core::{init_tracing, LogFormat};
use hookfeed_state::SurrealEventStore;
use hookfeedd::config::Args;
use hookfeedd::{router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::load();
    init_tracing(LogFormat::from_json_flag(args.json), args.log_level());

    let store = SurrealEventStore::connect(args.connection_config())
        .await
        .context("Failed to connect to hookfeed database")?;

    let app = router(AppState::new(Arc::new(store)), args.max_body_bytes);

    let addr = args.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "hookfeedd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("hookfeedd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
