use std::path::Path;

use super::ExtractError;

/// Extract text from a plain text file (UTF-8).
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    std::fs::read_to_string(path).map_err(|e| ExtractError::Txt(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_extract_text() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Hello, World!").unwrap();

        let text = extract_text(file.path()).unwrap();
        assert!(text.contains("Hello, World!"));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();

        assert!(extract_text(file.path()).is_err());
    }
}
