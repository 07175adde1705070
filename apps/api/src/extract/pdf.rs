//! PDF text extraction with an OCR fallback for scanned documents.

use tracing::{info, warn};

use crate::config::Config;
use crate::extract::{ocr, ExtractError};
use crate::parser::text::collapse_whitespace;

/// Extracts the PDF text layer. A document whose collapsed text yield
/// falls below `ocr_text_threshold` is treated as scanned and re-read
/// via OCR over rendered page images. That fallback is a quality
/// heuristic keyed on yield, not a retry of a failure.
pub fn extract_pdf(bytes: &[u8], config: &Config) -> Result<String, ExtractError> {
    let text = match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("PDF text layer unreadable, relying on OCR: {e}");
            String::new()
        }
    };

    if collapse_whitespace(&text).len() < config.ocr_text_threshold {
        info!(
            threshold = config.ocr_text_threshold,
            "PDF looks scanned or empty, running OCR over rendered pages"
        );
        return ocr::ocr_pdf(bytes, config);
    }

    Ok(text)
}
