//! Error types for the HTTP server.

use thiserror::Error;

use crate::app::Error as AppError;
use crate::context::Error as ContextError;
use crate::parser::Error as ParserError;

/// Errors that can occur during HTTP server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing an HTTP request.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The request could not be turned into a request context.
    #[error("Request error: {0}")]
    ContextError(#[from] ContextError),

    /// The application failed to produce a response.
    #[error("Application error: {0}")]
    AppError(#[from] AppError),
}
