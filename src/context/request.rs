//! The request context.

use std::collections::HashMap;

use url::Url;

use crate::context::error::Error;
use crate::context::query::{parse_query, QueryParams};

/// Host assumed for origin-form targets when the caller supplies none.
const DEFAULT_HOST: &str = "localhost";

/// A normalized, read-only view of an inbound call.
#[derive(Debug, Clone)]
pub struct RequestContext {
    method: String,
    url: Url,
    path: String,
    query: QueryParams,
    headers: HashMap<String, String>,
    env: serde_json::Value,
}

impl RequestContext {
    /// Build a context from a method, a URL and the request headers.
    ///
    /// # Arguments
    ///
    /// * `method` - The request method, in any case
    /// * `url` - An absolute URL, or an origin-form target starting with `/`
    /// * `headers` - The request headers
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `url` cannot be parsed.
    pub fn new(
        method: impl Into<String>,
        url: &str,
        headers: HashMap<String, String>,
    ) -> Result<Self, Error> {
        Self::from_target(method, None, url, headers)
    }

    /// Build a context from a request target and the `Host` it was sent to.
    ///
    /// An origin-form target (`/items/1?x=2`) is resolved against `host`, which
    /// must be a bare authority: `name` or `name:port`, without path, query,
    /// fragment or credentials. An absolute-form target is used as is and
    /// `host` is ignored.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidHost`] if `host` is not a bare authority, and
    /// [`Error::InvalidUrl`] if the resulting URL cannot be parsed.
    pub fn from_target(
        method: impl Into<String>,
        host: Option<&str>,
        target: &str,
        headers: HashMap<String, String>,
    ) -> Result<Self, Error> {
        let url = if target.starts_with('/') {
            let origin = host_origin(host.unwrap_or(DEFAULT_HOST))?;
            Url::parse(&format!("{origin}{target}"))?
        } else {
            Url::parse(target)?
        };
        let query = url.query().map(parse_query).unwrap_or_default();

        Ok(Self {
            method: method.into(),
            path: raw_path(target).to_string(),
            url,
            query,
            headers,
            env: serde_json::Value::Null,
        })
    }

    /// Attach opaque environment metadata supplied by the host.
    pub fn with_env(mut self, env: serde_json::Value) -> Self {
        self.env = env;
        self
    }

    /// The request method as received.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The full request URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The path exactly as sent: percent escapes and dot segments are kept.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// All decoded query parameters.
    pub fn query_params(&self) -> &QueryParams {
        &self.query
    }

    /// The first value of a query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// The request headers, as received.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Get a header value, ignoring the case of the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Host-supplied environment metadata, `Null` when none was attached.
    pub fn env(&self) -> &serde_json::Value {
        &self.env
    }
}

/// Validate a `Host` value and return the origin it names, e.g. `http://example.com:8080`.
fn host_origin(host: &str) -> Result<String, Error> {
    let invalid = || Error::InvalidHost(host.to_string());

    let base = Url::parse(&format!("http://{host}")).map_err(|_| invalid())?;
    if base.path() != "/"
        || base.query().is_some()
        || base.fragment().is_some()
        || !base.username().is_empty()
        || base.password().is_some()
    {
        return Err(invalid());
    }

    Ok(base.origin().ascii_serialization())
}

/// The path part of a target, before any query or fragment.
fn raw_path(target: &str) -> &str {
    let path = match target.split_once("://") {
        Some((_, rest)) if !target.starts_with('/') => match rest.find(['/', '?', '#']) {
            Some(start) if rest[start..].starts_with('/') => &rest[start..],
            _ => "/",
        },
        _ => target,
    };

    match path.find(['?', '#']) {
        Some(end) => &path[..end],
        None => path,
    }
}
