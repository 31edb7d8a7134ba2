//! Errors raised while reading a request head off the wire.

use thiserror::Error;

/// Why a request head was rejected.
///
/// The bridge answers every one of these with `400 Bad Request`.
#[derive(Debug, Error)]
pub enum Error {
    /// Nothing but whitespace before the end of the head.
    #[error("Empty request")]
    EmptyRequest,

    /// The request line does not have exactly three parts, or is not UTF-8.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The method contains characters outside the HTTP token set.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The target is neither origin-form (`/path`) nor an absolute http(s) URL.
    #[error("Invalid request target: {0}")]
    InvalidTarget(String),

    /// Only HTTP/1.0 and HTTP/1.1 are accepted.
    #[error("Invalid HTTP version: {0}")]
    InvalidVersion(String),

    /// A header line has no `:` separator.
    #[error("Invalid header format")]
    InvalidHeaderFormat,

    /// HTTP/1.1 requires a `Host` header.
    #[error("Required header is missing: {0}")]
    MissingHeader(String),
}
