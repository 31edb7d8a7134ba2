//! TCP transport bridge.
//!
//! Reads HTTP/1.x requests off tokio connections, runs them through an
//! [`App`](crate::app::App) and writes the outcome back. This is also where
//! failures that escape the app are given a status.

mod config;
mod error;
mod http_server;

// Re-export public items
pub use config::{ConversionPolicy, ServerConfig};
pub use error::Error;
pub use http_server::HttpServer;
