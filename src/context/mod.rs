//! The request context: a transport-independent view of one inbound call.

mod error;
mod query;
mod request;
mod tests;

// Re-export public items
pub use error::Error;
pub use query::{parse_query, QueryParams};
pub use request::RequestContext;
