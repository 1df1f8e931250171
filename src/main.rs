mod cli;
mod config;
mod extract;
mod llm;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Only show warnings by default, use RUST_LOG=debug for more detail
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            cli::commands::init::run(force).await?;
        }
        Commands::Auth { key, list } => {
            cli::commands::auth::run(key, list).await?;
        }
        Commands::Analyze {
            file,
            model,
            show_text,
        } => {
            cli::commands::analyze::run(file, model, show_text).await?;
        }
        Commands::Chat { file, model } => {
            cli::commands::chat::run(file, model).await?;
        }
        Commands::About => {
            cli::commands::about::run().await?;
        }
    }

    Ok(())
}
