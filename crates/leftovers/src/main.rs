//! Leftovers binary: web UI and one-shot recipe generation.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, handle_generate_command, handle_serve_command};
use leftovers::{LogFormat, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_tracing(LogFormat::from_env());

    let cli = Cli::parse();
    tracing::debug!(?cli, "Parsed arguments");

    match cli.command {
        Commands::Serve { bind } => handle_serve_command(cli.config.as_deref(), bind).await?,
        Commands::Generate(args) => handle_generate_command(cli.config.as_deref(), args).await?,
    }

    Ok(())
}
