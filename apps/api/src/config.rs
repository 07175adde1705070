use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default; the service starts with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upload size ceiling in bytes.
    pub max_upload_bytes: usize,
    /// Collapsed-text length under which a PDF is treated as scanned
    /// and sent through OCR. A tunable heuristic, not a hard law.
    pub ocr_text_threshold: usize,
    pub tesseract_cmd: String,
    pub pdftoppm_cmd: String,
    pub ocr_dpi: u32,
    pub ocr_lang: String,
}

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_OCR_TEXT_THRESHOLD: usize = 100;

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            ocr_text_threshold: DEFAULT_OCR_TEXT_THRESHOLD,
            tesseract_cmd: "tesseract".to_string(),
            pdftoppm_cmd: "pdftoppm".to_string(),
            ocr_dpi: 300,
            ocr_lang: "eng".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: string_env("RUST_LOG", &defaults.rust_log),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            ocr_text_threshold: parse_env("OCR_TEXT_THRESHOLD", defaults.ocr_text_threshold)?,
            tesseract_cmd: string_env("TESSERACT_CMD", &defaults.tesseract_cmd),
            pdftoppm_cmd: string_env("PDFTOPPM_CMD", &defaults.pdftoppm_cmd),
            ocr_dpi: parse_env("OCR_DPI", defaults.ocr_dpi)?,
            ocr_lang: string_env("OCR_LANG", &defaults.ocr_lang),
        })
    }
}

fn string_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
