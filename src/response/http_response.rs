//! The response type and conversions into it.

use std::collections::HashMap;

use serde::Serialize;

use crate::response::status::{reason_phrase, StatusCode};

/// The outcome of a call: status, headers and an already serialized body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: u16,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
    /// The response body
    pub body: Vec<u8>,
}

impl Default for Response {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Response {
    /// Create a `200` response with no headers.
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: StatusCode::Ok.as_u16(),
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Create a JSON response.
    ///
    /// The value is serialized now and `content-type` is set to `application/json`.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_vec(value)?;
        Ok(Self::new(body).with_header("content-type", "application/json"))
    }

    /// Create an HTML response with `content-type: text/html; charset=utf-8`.
    pub fn html(body: impl Into<String>) -> Self {
        let body: String = body.into();
        Self::new(body).with_header("content-type", "text/html; charset=utf-8")
    }

    /// Set the status code.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Add or replace a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Get a header value, ignoring the case of the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The body as text, replacing invalid UTF-8.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Convert the response to HTTP/1.1 wire bytes.
    ///
    /// A `Content-Length` header is added unless one is already set.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        // Add the status line
        let reason = reason_phrase(self.status).unwrap_or("");
        let status_line = format!("HTTP/1.1 {} {reason}\r\n", self.status);
        bytes.extend_from_slice(status_line.as_bytes());

        // Add the headers
        for (name, value) in &self.headers {
            let header_line = format!("{name}: {value}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }
        if self.header("content-length").is_none() {
            let header_line = format!("Content-Length: {}\r\n", self.body.len());
            bytes.extend_from_slice(header_line.as_bytes());
        }

        // Add the empty line that separates headers from body
        bytes.extend_from_slice(b"\r\n");

        // Add the body
        bytes.extend_from_slice(&self.body);

        bytes
    }
}

/// Values a handler may return in place of a full [`Response`].
///
/// Bare values become the body of a `200` response with no headers.
pub trait IntoResponse {
    /// Convert into a response.
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response {
        self
    }
}

impl IntoResponse for String {
    fn into_response(self) -> Response {
        Response::new(self)
    }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response {
        Response::new(self)
    }
}

impl IntoResponse for Vec<u8> {
    fn into_response(self) -> Response {
        Response::new(self)
    }
}

impl IntoResponse for () {
    fn into_response(self) -> Response {
        Response::default()
    }
}
