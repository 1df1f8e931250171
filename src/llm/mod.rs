mod gemini;
pub mod prompts;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::GeminiClient;

/// Generation failure. Every variant's Display starts with "Error:" so the
/// rendering layer can show it as an error banner instead of Markdown, the
/// same marker the original interface keyed on.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Error: Google API key not configured. Please set the GOOGLE_API_KEY environment variable.")]
    MissingCredential,

    #[error("Error: Google API key not configured properly. Error details: {0}")]
    Api(String),
}

/// A text-generation backend: one prompt in, one completion out. The trait
/// exists so tests can substitute a scripted backend for the live Gemini
/// endpoint.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;

    #[allow(dead_code)]
    fn name(&self) -> &'static str;
}
