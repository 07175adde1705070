//! Boundary adapter — raw uploaded bytes plus a declared extension in,
//! best-effort plain text out. Dispatches to the format-specific
//! providers; the core parser never sees file bytes.

mod docx;
mod ocr;
mod pdf;

use thiserror::Error;

use crate::config::Config;

/// Upload whitelist, checked before any extraction attempt.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "text", "jpg", "jpeg", "png"];

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: .{0}. Use PDF, DOCX, TXT, JPG, PNG.")]
    UnsupportedFormat(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("I/O error during extraction: {0}")]
    Io(#[from] std::io::Error),
}

pub fn is_supported(ext: &str) -> bool {
    SUPPORTED_EXTENSIONS.contains(&ext)
}

/// Dispatches by declared extension (lowercase, no dot) to the format
/// provider. Blocking — callers on the async runtime must wrap this in
/// `spawn_blocking`.
pub fn extract_raw_text(bytes: &[u8], ext: &str, config: &Config) -> Result<String, ExtractError> {
    match ext {
        "pdf" => pdf::extract_pdf(bytes, config),
        "docx" => docx::extract_docx(bytes),
        "txt" | "text" => Ok(String::from_utf8_lossy(bytes).into_owned()),
        "jpg" | "jpeg" | "png" => ocr::ocr_image(bytes, ext, config),
        other => Err(ExtractError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitelist_matches_upload_contract() {
        for ext in ["pdf", "docx", "txt", "text", "jpg", "jpeg", "png"] {
            assert!(is_supported(ext));
        }
        assert!(!is_supported("exe"));
        assert!(!is_supported("doc"));
        assert!(!is_supported(""));
    }

    #[test]
    fn test_unknown_extension_rejected_before_extraction() {
        let err = extract_raw_text(b"payload", "exe", &Config::default()).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(ext) if ext == "exe"));
    }

    #[test]
    fn test_plain_text_passthrough() {
        let text = extract_raw_text("John Smith\nPune".as_bytes(), "txt", &Config::default())
            .unwrap();
        assert_eq!(text, "John Smith\nPune");
    }

    #[test]
    fn test_plain_text_passthrough_is_lossy_on_invalid_utf8() {
        let text = extract_raw_text(&[0x4a, 0xff, 0x6f], "txt", &Config::default()).unwrap();
        assert!(text.starts_with('J'));
        assert!(text.ends_with('o'));
    }
}
