//! HTTP request head parsing and representation.

use std::collections::HashMap;
use std::str::FromStr;

use crate::parser::error::Error;
use crate::parser::version::HttpVersion;

/// Represents the head of an HTTP request as read off the wire.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method token, as sent
    pub method: String,
    /// The request target, e.g. `/items/1?x=2`
    pub target: String,
    /// The HTTP version
    pub version: HttpVersion,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
}

impl HttpRequest {
    /// Create a new HTTP request head.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method token
    /// * `target` - The request target
    /// * `version` - The HTTP version
    /// * `headers` - The HTTP headers
    pub fn new(
        method: impl Into<String>,
        target: impl Into<String>,
        version: HttpVersion,
        headers: HashMap<String, String>,
    ) -> Self {
        Self {
            method: method.into(),
            target: target.into(),
            version,
            headers,
        }
    }

    /// Get a header value.
    ///
    /// # Arguments
    ///
    /// * `name` - The header name
    ///
    /// # Returns
    ///
    /// The header value, if it exists
    pub fn get_header(&self, name: &str) -> Option<&String> {
        // Headers are case-insensitive, so we need to do a case-insensitive lookup
        self.headers.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                Some(v)
            } else {
                None
            }
        })
    }

    /// Check if a header exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.get_header(name).is_some()
    }
}

/// Whether `c` may appear in an HTTP token (RFC 9110, section 5.6.2).
fn is_tchar(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
}

/// Parse an HTTP request head from a byte slice.
///
/// # Arguments
///
/// * `input` - A byte slice containing the HTTP request to parse
///
/// # Returns
///
/// The parsed HTTP request head, or an error if the request is invalid
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    // Only the head has to be text; whatever follows the blank line is ignored
    let head_len = input
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .unwrap_or(input.len());
    let input_str = match std::str::from_utf8(&input[..head_len]) {
        Ok(s) => s,
        Err(_) => return Err(Error::MalformedRequestLine("Invalid UTF-8".to_string())),
    };

    // Split the input into lines
    let mut lines = input_str.lines();

    // Parse the request line
    let request_line = match lines.next() {
        Some(line) if !line.trim().is_empty() => line,
        _ => return Err(Error::EmptyRequest),
    };

    // Split the request line into method, target, and version
    let parts: Vec<&str> = request_line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(Error::MalformedRequestLine(request_line.to_string()));
    }

    // Validate the method
    let method = parts[0];
    if !method.chars().all(is_tchar) {
        return Err(Error::InvalidMethod(method.to_string()));
    }

    // Validate the target
    let target = parts[1];
    let absolute = target.starts_with("http://") || target.starts_with("https://");
    if !target.starts_with('/') && !absolute {
        return Err(Error::InvalidTarget(target.to_string()));
    }

    // Parse the version
    let version = HttpVersion::from_str(parts[2])?;

    // Parse the headers
    let mut headers = HashMap::new();
    for line in lines {
        // Empty line indicates the end of headers
        if line.is_empty() {
            break;
        }

        // Split the line into name and value
        let Some((name, value)) = line.split_once(':') else {
            return Err(Error::InvalidHeaderFormat);
        };

        // Trim whitespace from the name and value
        headers.insert(name.trim().to_string(), value.trim().to_string());
    }

    // Check for required headers
    if version == HttpVersion::Http11 && !headers.keys().any(|k| k.eq_ignore_ascii_case("Host")) {
        return Err(Error::MissingHeader("Host".to_string()));
    }

    // Create the request
    Ok(HttpRequest::new(method, target, version, headers))
}
