//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use leftovers::{Cuisine, MealType};
use std::path::PathBuf;

/// Leftover food recipe generator.
#[derive(Parser, Debug)]
#[command(name = "leftovers")]
#[command(about = "Generate a recipe from leftover ingredients")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file (default: ./leftovers.toml if present)
    #[arg(short, long, global = true, env = "LEFTOVERS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the recipe generator web UI
    Serve {
        /// Address to listen on, overriding the configuration
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Generate a single recipe and print it
    Generate(GenerateArgs),
}

/// Arguments for one-shot generation.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Ingredient to use (repeat for several)
    #[arg(short, long = "ingredient", required = true)]
    pub ingredients: Vec<String>,

    /// Meal type: Dinner, Lunch, Breakfast or Snack
    #[arg(short, long, default_value_t = MealType::Dinner)]
    pub meal_type: MealType,

    /// Cuisine: Italian, Mexican, Indian, Chinese or American
    #[arg(short = 'k', long, default_value_t = Cuisine::Italian)]
    pub cuisine: Cuisine,
}

impl GenerateArgs {
    /// Ingredients as entered in the web form: one per line.
    pub fn ingredient_list(&self) -> String {
        self.ingredients.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_args_parse() {
        let cli = Cli::parse_from([
            "leftovers",
            "generate",
            "-i",
            "chicken",
            "--ingredient",
            "rice",
            "--meal-type",
            "lunch",
            "--cuisine",
            "Mexican",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.ingredient_list(), "chicken\nrice");
        assert_eq!(args.meal_type, MealType::Lunch);
        assert_eq!(args.cuisine, Cuisine::Mexican);
    }

    #[test]
    fn test_generate_defaults_to_first_selections() {
        let cli = Cli::parse_from(["leftovers", "generate", "-i", "eggs"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.meal_type, MealType::Dinner);
        assert_eq!(args.cuisine, Cuisine::Italian);
    }

    #[test]
    fn test_unknown_cuisine_rejected() {
        let result = Cli::try_parse_from(["leftovers", "generate", "-i", "eggs", "-k", "Martian"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serve_bind_override() {
        let cli = Cli::parse_from(["leftovers", "serve", "--bind", "0.0.0.0:8080"]);
        assert!(matches!(cli.command, Commands::Serve { bind: Some(ref b) } if b == "0.0.0.0:8080"));
    }
}
