//! Error types for building a request context.

use thiserror::Error;

/// Errors that can occur while building a request context.
#[derive(Debug, Error)]
pub enum Error {
    /// The request URL could not be parsed.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The `Host` value is not a bare `name[:port]` authority.
    #[error("Invalid host: {0}")]
    InvalidHost(String),
}
