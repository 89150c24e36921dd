// newscheck/src/commands/serve.rs
//! `newscheck serve`: host the web form.

use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use newscheck_core::NewsDetector;

use crate::cli::ServeCommand;
use crate::commands::{load_classifier, load_detector_config};
use crate::server::{bind_with_fallback, build_router, AppState};

/// Loads artifacts, binds a listener and serves until Ctrl-C.
pub async fn run_serve(cmd: ServeCommand) -> Result<()> {
    let config = load_detector_config(&cmd.artifacts)?;
    let classifier = load_classifier(&cmd.artifacts)?;
    let detector = NewsDetector::new(Arc::new(classifier), &config)?;

    let listener = bind_with_fallback(&cmd.host, cmd.port, cmd.fallback_port).await?;
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!("newscheck listening on http://{}", addr);

    let app = build_router(AppState::new(detector));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("newscheck stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested.");
}
