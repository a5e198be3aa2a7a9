//! Shared application state.
//!
//! Every request renders with the same settings; nothing else is shared
//! between uploads.

use std::sync::Arc;

use blockflow_engine::{OutputFormat, RenderConfig};

#[derive(Clone)]
pub struct AppState {
    /// Render settings with the output forced to markup.
    pub render: Arc<RenderConfig>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(render: RenderConfig, max_upload_bytes: usize) -> Self {
        Self {
            render: Arc::new(render.with_output(OutputFormat::Html)),
            max_upload_bytes,
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
