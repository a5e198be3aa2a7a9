//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three endpoints: the upload form at `/`, the upload target at `/upload`
//! and a liveness check at `/healthz`. Request bodies are capped a little
//! above the configured upload size so the multipart framing still fits;
//! the file itself is checked against the exact limit in `upload`.

use axum::Router;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::page;
use crate::state::AppState;
use crate::upload::{self, UploadError};

/// Room for multipart boundaries and part headers on top of the file.
const MULTIPART_OVERHEAD: usize = 16 * 1024;

pub fn app(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD);
    Router::new()
        .route("/", get(index))
        .route("/upload", post(upload_file))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(page::index_page())
}

async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, UploadError> {
    let upload = upload::read_upload(&mut multipart).await?;
    let filename = upload.filename.clone();
    let markup =
        upload::render_upload(upload, state.render.clone(), state.max_upload_bytes).await?;
    tracing::info!(%filename, bytes = markup.len(), "rendered upload");
    Ok(Html(page::result_page(&filename, &markup)))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
