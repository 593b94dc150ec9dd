//! Web UI command handler.

use leftovers::{LeftoversConfig, LeftoversResult, ModelProvider, RecipeGenerator, serve};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Handle the `serve` command.
///
/// The model is loaded before the listener is bound, so a missing or
/// unreachable model stops startup instead of failing the first request.
pub async fn handle_serve_command(
    config_path: Option<&Path>,
    bind: Option<String>,
) -> LeftoversResult<()> {
    let mut config = LeftoversConfig::load(config_path)?;
    if let Some(bind) = bind {
        config = config.with_bind(bind)?;
    }

    let provider = Arc::new(ModelProvider::hugging_face(config.model().clone()));
    let model = provider.get_model().await?;
    info!(model = model.model_name(), "Model loaded");

    let generator = Arc::new(RecipeGenerator::new(provider));
    serve(config.server(), generator).await?;
    Ok(())
}
