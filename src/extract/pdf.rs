use std::path::Path;

use super::ExtractError;

/// Extract text from a PDF file. Page text is concatenated exactly as the
/// decoder yields it, with no separator inserted between pages.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path).map_err(|e| ExtractError::Pdf(e.to_string()))?;

    let text =
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractError::Pdf(e.to_string()))?;

    tracing::debug!(path = %path.display(), chars = text.len(), "extracted PDF text");

    Ok(text)
}
