//! One-shot generation command handler.

use super::GenerateArgs;
use leftovers::{
    GenerationRequest, LeftoversConfig, LeftoversResult, ModelProvider, RecipeGenerator,
};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Handle the `generate` command.
///
/// Prints the ingredients and the recipe, or the generation error in place of
/// the recipe.
pub async fn handle_generate_command(
    config_path: Option<&Path>,
    args: GenerateArgs,
) -> LeftoversResult<()> {
    let request = GenerationRequest::new(args.ingredient_list(), args.meal_type, args.cuisine)
        .inspect_err(|e| warn!(reason = %e.kind, "Rejected ingredients"))?;

    let config = LeftoversConfig::load(config_path)?;
    let provider = Arc::new(ModelProvider::hugging_face(config.model().clone()));
    let generator = RecipeGenerator::new(provider);

    info!(meal_type = %args.meal_type, cuisine = %args.cuisine, "Generating recipe");
    let recipe = generator.generate_text(&request).await;

    write_result(&mut std::io::stdout().lock(), &request, &recipe)
}

/// Writes the ingredients echo and the recipe text.
fn write_result(
    out: &mut impl Write,
    request: &GenerationRequest,
    recipe: &str,
) -> LeftoversResult<()> {
    writeln!(
        out,
        "### Ingredients:\n{}\n\n### Recipe:\n{}",
        request.ingredients(),
        recipe
    )?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use leftovers::{Cuisine, LeftoversErrorKind, MealType};

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("chicken\nrice", MealType::Dinner, Cuisine::Italian).unwrap()
    }

    #[test]
    fn test_writes_ingredients_and_recipe() {
        let mut out = Vec::new();
        write_result(&mut out, &request(), "Simmer.").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "### Ingredients:\nchicken\nrice\n\n### Recipe:\nSimmer.\n"
        );
    }

    #[test]
    fn test_write_failure_is_reported() {
        let err = write_result(&mut ClosedPipe, &request(), "Simmer.").unwrap_err();
        assert!(matches!(err.kind(), LeftoversErrorKind::Io(_)));
    }
}
