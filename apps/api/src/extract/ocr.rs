//! Optical character recognition via the `tesseract` CLI, with
//! `pdftoppm` (poppler-utils) rendering PDF pages to images first.
//! Page images live in a scoped temp directory that is removed on every
//! exit path.

use std::io::Write;
use std::path::Path;
use std::process::Command;

use tracing::{info, warn};

use crate::config::Config;
use crate::extract::ExtractError;

/// OCR for a standalone image upload (JPG/PNG).
pub fn ocr_image(bytes: &[u8], ext: &str, config: &Config) -> Result<String, ExtractError> {
    let mut file = tempfile::Builder::new()
        .prefix("resume-ocr-")
        .suffix(&format!(".{ext}"))
        .tempfile()?;
    file.write_all(bytes)?;
    run_tesseract(file.path(), config)
}

/// OCR for a scanned PDF: render every page to PNG with pdftoppm, then
/// run tesseract over each page in order.
pub fn ocr_pdf(bytes: &[u8], config: &Config) -> Result<String, ExtractError> {
    let dir = tempfile::tempdir()?;
    let pdf_path = dir.path().join("input.pdf");
    std::fs::write(&pdf_path, bytes)?;

    let output_prefix = dir.path().join("page");
    let rendered = Command::new(&config.pdftoppm_cmd)
        .arg("-png")
        .arg("-r")
        .arg(config.ocr_dpi.to_string())
        .arg(&pdf_path)
        .arg(&output_prefix)
        .output()
        .map_err(|e| {
            ExtractError::Ocr(format!(
                "failed to run {} (install poppler-utils): {e}",
                config.pdftoppm_cmd
            ))
        })?;

    if !rendered.status.success() {
        let stderr = String::from_utf8_lossy(&rendered.stderr);
        return Err(ExtractError::Ocr(format!(
            "{} failed: {}",
            config.pdftoppm_cmd,
            stderr.trim()
        )));
    }

    let mut pages: Vec<_> = std::fs::read_dir(dir.path())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map(|e| e == "png").unwrap_or(false))
        .collect();
    pages.sort();

    if pages.is_empty() {
        return Err(ExtractError::Ocr(format!(
            "{} produced no page images",
            config.pdftoppm_cmd
        )));
    }

    info!(pages = pages.len(), "rendered PDF pages, starting OCR");

    let mut texts = Vec::with_capacity(pages.len());
    for page in &pages {
        texts.push(run_tesseract(page, config)?);
    }
    Ok(texts.join("\n"))
}

/// Runs tesseract over one image, reading recognized text from stdout.
/// A non-zero exit with usable stdout is logged and tolerated — the
/// extraction contract is best effort.
fn run_tesseract(image: &Path, config: &Config) -> Result<String, ExtractError> {
    let output = Command::new(&config.tesseract_cmd)
        .arg(image)
        .arg("stdout")
        .arg("-l")
        .arg(&config.ocr_lang)
        .output()
        .map_err(|e| {
            ExtractError::Ocr(format!(
                "failed to run {} (install tesseract-ocr): {e}",
                config.tesseract_cmd
            ))
        })?;

    let text = String::from_utf8_lossy(&output.stdout).into_owned();
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        if text.trim().is_empty() {
            return Err(ExtractError::Ocr(format!(
                "{} failed: {}",
                config.tesseract_cmd,
                stderr.trim()
            )));
        }
        warn!("tesseract exited non-zero but produced text: {}", stderr.trim());
    }
    Ok(text)
}
