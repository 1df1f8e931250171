use anyhow::{Context, Result};
use console::{style, Emoji};
use std::fs;

use crate::config::Config;

static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
static KEY: Emoji<'_, '_> = Emoji("🔑 ", "");

pub async fn run(force: bool) -> Result<()> {
    println!();
    println!("{}", style(" CareerLens - Initialization ").bold().reverse());
    println!();

    let config_dir = Config::config_dir()?;
    let config_path = config_dir.join("config.toml");

    if config_path.exists() && !force {
        println!(
            "{}Configuration already exists at {}",
            WARN,
            style(config_path.display()).cyan()
        );
        println!("  Use {} to overwrite", style("--force").yellow());
        return Ok(());
    }

    fs::create_dir_all(&config_dir).context("Failed to create config directory")?;

    let default_config = Config::default();
    let content =
        toml::to_string_pretty(&default_config).context("Failed to serialize configuration")?;
    fs::write(&config_path, content).context("Failed to write config file")?;

    println!(
        "{}Configuration created at {}",
        CHECK,
        style(config_path.display()).cyan()
    );
    println!();
    println!("{}Next, set your Gemini API key:", KEY);
    println!("  {} export GOOGLE_API_KEY=your-key", style("$").dim());
    println!("  or run: {} careerlens auth", style("$").dim());

    Ok(())
}
