//! Error types for the dispatch pipeline.

use thiserror::Error;

use crate::binding::Error as BindingError;

/// Failures that escape [`App::handle`](crate::app::App::handle).
///
/// Structured HTTP errors never show up here; they become responses. What is
/// left is for the caller to map to a status.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter could not be converted, or a handler read an unbound one.
    #[error(transparent)]
    Binding(#[from] BindingError),

    /// An HTTP exception carried neither a detail nor a known status code.
    #[error("No detail given and no reason phrase known for status {0}")]
    UnknownStatus(u16),

    /// JSON serialization failed inside a handler.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other handler failure.
    #[error("Handler failed: {0}")]
    Handler(Box<dyn std::error::Error + Send + Sync>),
}
