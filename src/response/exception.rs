//! Structured HTTP errors raised by handlers.

use std::collections::HashMap;
use std::fmt;

use crate::response::http_response::Response;
use crate::response::status::reason_phrase;

/// An expected failure that short-circuits a handler with a given status.
///
/// When no detail is given, the standard reason phrase for the status is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpException {
    status_code: u16,
    detail: Option<String>,
    headers: Option<HashMap<String, String>>,
}

impl HttpException {
    /// Create an exception with the default detail and no headers.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            detail: None,
            headers: None,
        }
    }

    /// Set an explicit detail message.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add a header to the outcome.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// The status code.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The explicit detail, or the reason phrase for the status.
    ///
    /// `None` when neither exists.
    pub fn detail(&self) -> Option<&str> {
        self.detail
            .as_deref()
            .or_else(|| reason_phrase(self.status_code))
    }

    /// Extra headers, if any were set.
    pub fn headers(&self) -> Option<&HashMap<String, String>> {
        self.headers.as_ref()
    }

    /// Turn the exception into its outcome, with the detail as the body.
    ///
    /// Returns `None` if there is no detail to use.
    pub fn to_response(&self) -> Option<Response> {
        let detail = self.detail()?;
        Some(Response {
            status: self.status_code,
            headers: self.headers.clone().unwrap_or_default(),
            body: detail.as_bytes().to_vec(),
        })
    }
}

impl fmt::Display for HttpException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status_code, self.detail().unwrap_or("<no detail>"))
    }
}

impl std::error::Error for HttpException {}
