//! The application: route registration, dispatch and handler invocation.
//!
//! An [`App`] is populated once at startup and read-only afterwards. Each call
//! goes through [`App::handle`]: dispatch on method and path, bind the handler's
//! declared parameters, invoke the handler and turn its result into a
//! [`Response`](crate::response::Response).

mod error;
mod handler;
mod router;

// Re-export public items
pub use error::Error;
pub use handler::{Handler, HandlerError, HandlerFn, HandlerFuture};
pub use router::App;
