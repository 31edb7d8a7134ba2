//! HTTP/1.x request head parsing for the transport bridge.
//!
//! [`parse_request`] reads the request line and headers into an
//! [`HttpRequest`]; the server then builds a
//! [`RequestContext`](crate::context::RequestContext) from its method,
//! target, `Host` header and headers.

mod error;
mod request;
mod tests;
mod version;

pub use error::Error;
pub use request::{parse_request, HttpRequest};
pub use version::HttpVersion;
