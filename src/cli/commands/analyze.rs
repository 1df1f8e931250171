use anyhow::{Context, Result};
use console::{style, Emoji};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::llm::GeminiClient;
use crate::session::{ResumeDocument, Session};

static PAPER: Emoji<'_, '_> = Emoji("📄 ", "");
static BRAIN: Emoji<'_, '_> = Emoji("🧠 ", "");
static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

pub async fn run(file: PathBuf, model: Option<String>, show_text: bool) -> Result<()> {
    println!();
    println!("{}", style(" CareerLens - Resume Analyzer ").bold().reverse());
    println!();

    let config = Config::load().context("Failed to load configuration")?;
    let model = model.unwrap_or_else(|| config.default_model.clone());

    println!("{}Model: {}", BRAIN, style(&model).cyan());
    println!("{}Resume: {}", PAPER, style(file.display()).cyan());
    println!();

    let mut session = Session::new(config.api_key());

    let generator = match GeminiClient::new(&config.api_key(), &model, config.google.base_url.as_deref()) {
        Ok(g) => g,
        Err(e) => {
            super::print_error_banner(&e.to_string());
            println!("  Run {} to configure a key.", style("careerlens auth").yellow());
            return Ok(());
        }
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Analyzing your resume...");

    let result = session.upload(&file, &generator).await;
    spinner.finish_and_clear();

    if let Err(e) = result {
        super::print_error_banner(&e.to_string());
        // Extraction may still have succeeded; show what we got.
        if let Some(document) = session.document() {
            println!();
            print_stats(document, show_text);
        }
        return Ok(());
    }

    let document = session
        .document()
        .context("analysis succeeded without a document")?;
    print_stats(document, show_text);

    let analysis = session
        .analysis()
        .context("analysis succeeded without a result")?;

    println!("{}Resume Analysis Results", SPARKLE);
    println!();
    println!("{}", analysis);
    println!();
    println!(
        "Ask follow-up questions with: {} careerlens chat {}",
        style("$").dim(),
        file.display()
    );

    Ok(())
}

fn print_stats(document: &ResumeDocument, show_text: bool) {
    println!("{}Resume Stats", PAPER);
    println!(
        "  Word Count: {}",
        style(document.word_count()).cyan().bold()
    );
    println!(
        "  Character Count: {}",
        style(document.char_count()).cyan().bold()
    );
    println!();

    if show_text {
        println!("{}", style("── Extracted Text ──").dim());
        println!("{}", style(&document.text).dim());
        println!();
    }
}
