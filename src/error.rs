use crate::validation::ValidationError;
use educafric_render_core::RenderError;
use thiserror::Error;

/// Errors surfaced by the document generators.
///
/// Drawing problems inside a page are logged and skipped by the text
/// primitives. Only failures that leave no usable document end up here.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Table overflow: only {rendered} of {total} rows fit on the page")]
    Overflow { rendered: usize, total: usize },

    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration is invalid: {0}")]
    Config(String),
}
