//! Upload handlers — the form-upload page and the JSON API endpoint.
//! Both accept one multipart file per request, reject non-whitelisted
//! extensions before extraction, and hand blocking extraction work to
//! `spawn_blocking`.

use std::path::Path;

use axum::extract::{Multipart, State};
use axum::response::Html;
use axum::Json;
use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extract::{self, ExtractError};
use crate::parser::{fields, ResumeRecord};
use crate::routes::page;
use crate::state::AppState;

/// Parse outcome for the HTML page: the record plus the hyperlinks
/// found in the raw text (links are page-only, not part of the schema).
pub struct ParseOutcome {
    pub record: ResumeRecord,
    pub links: Vec<String>,
}

/// GET / — the upload form.
pub async fn index() -> Html<String> {
    Html(page::render_page(None, None))
}

/// POST / — multipart upload, renders the parsed result (or the error)
/// back into the same page.
pub async fn upload_form(State(state): State<AppState>, multipart: Multipart) -> Html<String> {
    match parse_upload(&state, multipart).await {
        Ok(outcome) => Html(page::render_page(Some(&outcome), None)),
        Err(e) => {
            warn!("upload failed: {e}");
            Html(page::render_page(None, Some(&e.to_string())))
        }
    }
}

/// POST /api/parse — multipart upload, returns the ResumeRecord as JSON
/// or `{"error": <message>}` with a non-2xx status.
pub async fn api_parse(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResumeRecord>, AppError> {
    let outcome = parse_upload(&state, multipart).await?;
    Ok(Json(outcome.record))
}

async fn parse_upload(state: &AppState, multipart: Multipart) -> Result<ParseOutcome, AppError> {
    let (filename, data) = read_file_field(multipart).await?;
    let ext = extension_of(&filename);

    if !extract::is_supported(&ext) {
        return Err(AppError::from(ExtractError::UnsupportedFormat(ext)));
    }
    if data.len() > state.config.max_upload_bytes {
        return Err(AppError::Validation(format!(
            "File exceeds the {} byte upload limit",
            state.config.max_upload_bytes
        )));
    }

    info!(
        file = %filename,
        bytes = data.len(),
        "parsing uploaded resume"
    );

    let parser = state.parser.clone();
    let config = state.config.clone();
    let outcome = tokio::task::spawn_blocking(move || -> Result<ParseOutcome, ExtractError> {
        let text = extract::extract_raw_text(&data, &ext, &config)?;
        let record = parser.parse_text(&text);
        let links = fields::extract_links(&text);
        Ok(ParseOutcome { record, links })
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("parse task panicked: {e}")))??;

    info!(
        name = %outcome.record.name,
        skills = outcome.record.skills.len(),
        "resume parsed"
    );
    Ok(outcome)
}

/// Pulls the `file` field out of the multipart body. A missing field or
/// empty filename is a validation error, mirroring the upload contract.
async fn read_file_field(mut multipart: Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::Validation("file is required".to_string()));
        }
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        return Ok((filename, data));
    }
    Err(AppError::Validation("file is required".to_string()))
}

fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of_lowercases() {
        assert_eq!(extension_of("Resume.PDF"), "pdf");
        assert_eq!(extension_of("cv.docx"), "docx");
        assert_eq!(extension_of("photo.JPeG"), "jpeg");
    }

    #[test]
    fn test_extension_of_missing() {
        assert_eq!(extension_of("no_extension"), "");
        assert_eq!(extension_of(""), "");
    }
}
