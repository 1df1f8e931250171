mod docx;
mod pdf;
mod text;

use std::path::Path;

use thiserror::Error;

/// Source format of an uploaded resume, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Pdf,
    Docx,
    PlainText,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Pdf => write!(f, "PDF"),
            SourceFormat::Docx => write!(f, "DOCX"),
            SourceFormat::PlainText => write!(f, "TXT"),
        }
    }
}

/// Extraction failure. Display strings are user-facing and rendered
/// verbatim by the CLI, so they stay stable.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Error extracting text from PDF: {0}")]
    Pdf(String),

    #[error("Error extracting text from DOCX: {0}")]
    Docx(String),

    #[error("Error extracting text from TXT: {0}")]
    Txt(String),

    #[error("Unsupported file format")]
    UnsupportedFormat { extension: String },
}

/// Extract plain text from a resume file, dispatching on the lower-cased
/// file extension. Supported: `.pdf`, `.docx`, `.txt`.
pub fn extract_text(path: &Path) -> Result<(String, SourceFormat), ExtractError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => Ok((pdf::extract_text(path)?, SourceFormat::Pdf)),
        "docx" => Ok((docx::extract_text(path)?, SourceFormat::Docx)),
        "txt" => Ok((text::extract_text(path)?, SourceFormat::PlainText)),
        _ => Err(ExtractError::UnsupportedFormat { extension }),
    }
}
