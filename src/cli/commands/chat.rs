use anyhow::{Context, Result};
use console::{style, Emoji};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::llm::GeminiClient;
use crate::session::{Role, Session};

static PAPER: Emoji<'_, '_> = Emoji("📄 ", "");
static BRAIN: Emoji<'_, '_> = Emoji("🧠 ", "");
static CHAT: Emoji<'_, '_> = Emoji("💬 ", "");

const SAMPLE_QUESTIONS: &[&str] = &[
    "What are the key skills in this resume?",
    "How many years of experience does this person have?",
    "What are the educational qualifications in this resume?",
    "What are the main achievements in this resume?",
    "Can you summarize this resume in a few sentences?",
    "Is this resume well-optimized for job applications?",
    "What improvements could be made to this resume?",
];

pub async fn run(file: PathBuf, model: Option<String>) -> Result<()> {
    println!();
    println!("{}", style(" CareerLens - Chat ").bold().reverse());
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

    let spinner = make_spinner("Analyzing your resume...");
    let result = session.upload(&file, &generator).await;
    spinner.finish_and_clear();

    match result {
        Ok(analysis) => {
            println!("{}", analysis);
            println!();
        }
        Err(e) => {
            super::print_error_banner(&e.to_string());
            if session.document().is_none() {
                return Ok(());
            }
            // The resume text was extracted, so chat still works even
            // though the analysis failed.
            println!();
        }
    }

    println!("{}Ask questions about this resume. Sample questions:", CHAT);
    for question in SAMPLE_QUESTIONS {
        println!("  {} {}", style("-").dim(), style(question).dim());
    }
    println!();
    println!(
        "Commands: {} clear the conversation, {} reset the whole session, {} show the transcript, {} exit",
        style("/clear").yellow(),
        style("/reset").yellow(),
        style("/history").yellow(),
        style("/quit").yellow()
    );
    println!();

    let stdin = io::stdin();
    loop {
        print!("{} ", style("You:").green().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/clear" => {
                session.clear_conversation();
                println!("{}", style("Conversation cleared.").yellow());
                continue;
            }
            "/reset" => {
                session.reset();
                println!(
                    "{}",
                    style("Session reset: document, analysis, and conversation cleared.").yellow()
                );
                continue;
            }
            "/history" => {
                print_history(&session);
                continue;
            }
            _ => {}
        }

        let spinner = make_spinner("AI is thinking...");
        let result = session.ask(input, &generator).await;
        spinner.finish_and_clear();

        match result {
            Ok(answer) => {
                println!("{} {}", style("AI:").cyan().bold(), answer);
                println!();
            }
            Err(e) => {
                super::print_error_banner(&e.to_string());
                println!();
            }
        }
    }

    Ok(())
}

fn make_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(message);
    spinner
}

fn print_history(session: &Session) {
    if session.conversation().is_empty() {
        println!("{}", style("No conversation yet.").dim());
        return;
    }

    for entry in session.conversation() {
        let label = match entry.role {
            Role::User => style("You:").green().bold(),
            Role::Assistant => style("AI:").cyan().bold(),
        };
        println!("{} {}", label, entry.text);
    }
    println!();
}
