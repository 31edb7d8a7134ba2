//! Responses, structured HTTP errors and the reason-phrase table.

mod exception;
mod http_response;
mod status;

// Re-export public items
pub use exception::HttpException;
pub use http_response::{IntoResponse, Response};
pub use status::{reason_phrase, StatusCode};
