pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "careerlens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "CareerLens: Your Resume's Secret Weapon", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long, default_value = "false")]
        force: bool,
    },

    /// Configure the Google Gemini API key
    #[command(long_about = "Configure the Google Gemini API key.\n\n\
        The key is read from the GOOGLE_API_KEY environment variable by\n\
        default; 'careerlens auth' stores one in the config file instead\n\
        (~/.config/careerlens/config.toml). A custom base_url can be set in\n\
        the config file to point at a proxy or compatible gateway.")]
    Auth {
        /// Set API key directly (alternative to interactive prompt)
        #[arg(short, long)]
        key: Option<String>,

        /// Show credential status instead of setting a key
        #[arg(long, default_value = "false")]
        list: bool,
    },

    /// Analyze a resume file (.pdf, .docx, .txt)
    Analyze {
        /// Path to the resume file
        #[arg(required = true)]
        file: PathBuf,

        /// Gemini model name (e.g. gemini-1.5-pro, gemini-2.0-flash)
        #[arg(short, long, env = "CAREERLENS_MODEL")]
        model: Option<String>,

        /// Also print the extracted resume text before the analysis
        #[arg(long, default_value = "false")]
        show_text: bool,
    },

    /// Analyze a resume, then ask questions about it interactively
    Chat {
        /// Path to the resume file
        #[arg(required = true)]
        file: PathBuf,

        /// Gemini model name (e.g. gemini-1.5-pro, gemini-2.0-flash)
        #[arg(short, long, env = "CAREERLENS_MODEL")]
        model: Option<String>,
    },

    /// Show what CareerLens is and how to use it
    About,
}
