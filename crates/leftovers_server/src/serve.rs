//! Binding and running the web UI.

use crate::{ServerConfig, create_router};
use leftovers_error::{ServerError, ServerErrorKind};
use leftovers_recipe::RecipeGenerator;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// Serves the web UI until Ctrl+C.
///
/// # Errors
///
/// Returns a [`ServerError`] if the address cannot be bound or the server
/// loop fails.
#[instrument(skip_all, fields(bind = %config.bind()))]
pub async fn serve(
    config: &ServerConfig,
    generator: Arc<RecipeGenerator>,
) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.bind().as_str()).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            address: config.bind().clone(),
            message: e.to_string(),
        })
    })?;

    let address = listener
        .local_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| config.bind().clone());
    info!(address = %address, "Recipe generator listening");

    axum::serve(listener, create_router(generator))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
