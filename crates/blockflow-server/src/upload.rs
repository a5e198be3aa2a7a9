//! Upload handling: multipart extraction, validation and rendering.
//!
//! Validation order is filename, extension, size, then encoding, so the
//! cheapest rejection wins. Rendering runs on a blocking task with its own
//! copy of the source; no state survives between uploads.

use std::path::Path;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use blockflow_engine::{Language, LanguageError, RenderConfig, render};
use thiserror::Error;

use crate::page;

/// Form field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("no file was uploaded")]
    MissingFile,
    #[error("the uploaded file has no name")]
    MissingFilename,
    #[error(transparent)]
    Language(#[from] LanguageError),
    #[error("file exceeds the {limit} byte upload limit")]
    TooLarge { limit: usize },
    #[error("file is not valid UTF-8")]
    NotUtf8,
    #[error("malformed upload: {0}")]
    Multipart(#[from] MultipartError),
    #[error("rendering failed: {0}")]
    Render(String),
}

pub fn upload_error_to_status(err: &UploadError) -> StatusCode {
    match err {
        UploadError::MissingFile
        | UploadError::MissingFilename
        | UploadError::Language(_)
        | UploadError::NotUtf8 => StatusCode::BAD_REQUEST,
        UploadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        UploadError::Multipart(e) => e.status(),
        UploadError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = upload_error_to_status(&self);
        if status.is_server_error() {
            tracing::error!(error = %self, "upload failed");
        } else {
            tracing::warn!(error = %self, %status, "upload rejected");
        }
        (status, Html(page::error_page(&self.to_string()))).into_response()
    }
}

/// The file part of an upload form.
#[derive(Debug)]
pub struct Upload {
    pub filename: String,
    pub bytes: Bytes,
}

/// Finds the `file` field; other fields are skipped.
pub async fn read_upload(multipart: &mut Multipart) -> Result<Upload, UploadError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field
            .file_name()
            .filter(|name| !name.is_empty())
            .ok_or(UploadError::MissingFilename)?
            .to_string();
        let bytes = field.bytes().await?;
        return Ok(Upload { filename, bytes });
    }
    Err(UploadError::MissingFile)
}

/// Checks an upload and decodes it into source text.
pub fn decode(filename: &str, bytes: &[u8], limit: usize) -> Result<(Language, String), UploadError> {
    let language = Language::from_path(Path::new(filename))?;
    if bytes.len() > limit {
        return Err(UploadError::TooLarge { limit });
    }
    let source = String::from_utf8(bytes.to_vec()).map_err(|_| UploadError::NotUtf8)?;
    Ok((language, source))
}

/// Decodes and renders an upload off the async runtime.
pub async fn render_upload(
    upload: Upload,
    config: Arc<RenderConfig>,
    limit: usize,
) -> Result<String, UploadError> {
    let (language, source) = decode(&upload.filename, &upload.bytes, limit)?;
    tracing::debug!(filename = %upload.filename, %language, bytes = source.len(), "rendering upload");
    tokio::task::spawn_blocking(move || render(&source, language, &config))
        .await
        .map_err(|e| UploadError::Render(e.to_string()))
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
