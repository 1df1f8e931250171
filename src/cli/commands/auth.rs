use anyhow::{Context, Result};
use console::{style, Emoji};
use std::fs;
use std::io::{self, Write};

use crate::config::Config;

static KEY: Emoji<'_, '_> = Emoji("🔑 ", "");
static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[X] ");

pub async fn run(key: Option<String>, list: bool) -> Result<()> {
    println!();
    println!("{}", style(" CareerLens - Authentication ").bold().reverse());
    println!();

    if list {
        return show_status();
    }

    let api_key = match key {
        Some(k) => k,
        None => prompt_api_key()?,
    };

    save_api_key(&api_key)?;

    println!();
    println!(
        "{}API key for {} configured successfully!",
        CHECK,
        style("Google Gemini").cyan().bold()
    );

    Ok(())
}

fn show_status() -> Result<()> {
    let (configured, detail) = credential_status();

    let status_icon = if configured { CHECK } else { CROSS };
    let status_text = if configured {
        style("Configured").green()
    } else {
        style("Not configured").red()
    };

    println!(
        "  {}{:<8} {} {}",
        status_icon,
        "Gemini",
        status_text,
        style(detail).dim()
    );

    if !configured {
        println!();
        println!("{}Set an API key with:", KEY);
        println!("  {} export GOOGLE_API_KEY=your-key", style("$").dim());
        println!("  {} careerlens auth --key your-key", style("$").dim());
    }

    Ok(())
}

fn credential_status() -> (bool, String) {
    if let Ok(val) = std::env::var("GOOGLE_API_KEY") {
        if !val.is_empty() {
            return (true, "(from GOOGLE_API_KEY)".to_string());
        }
    }

    if let Ok(config) = Config::load() {
        if !config.google.api_key.is_empty() {
            return (true, "(from config)".to_string());
        }
    }

    (false, String::new())
}

fn prompt_api_key() -> Result<String> {
    print!(
        "{} Enter your Google API key: ",
        style("?").green().bold()
    );
    io::stdout().flush()?;

    let mut api_key = String::new();
    io::stdin().read_line(&mut api_key)?;
    let api_key = api_key.trim().to_string();

    if api_key.is_empty() {
        anyhow::bail!("API key cannot be empty");
    }

    Ok(api_key)
}

fn save_api_key(api_key: &str) -> Result<()> {
    let config_path = Config::config_path()?;

    let mut config = if config_path.exists() {
        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")?
    } else {
        fs::create_dir_all(Config::config_dir()?).context("Failed to create config directory")?;
        Config::default()
    };

    config.google.api_key = api_key.to_string();

    let content = toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
    fs::write(&config_path, content).context("Failed to write config file")?;

    Ok(())
}
