//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};

use crate::response::StatusCode;

/// The status given to a call whose parameter failed type conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionPolicy {
    /// Treat it as a server fault: `500 Internal Server Error`.
    #[default]
    InternalError,
    /// Blame the client: `400 Bad Request`.
    BadRequest,
}

impl ConversionPolicy {
    /// The status this policy maps a conversion failure to.
    pub fn status(&self) -> StatusCode {
        match self {
            ConversionPolicy::InternalError => StatusCode::InternalServerError,
            ConversionPolicy::BadRequest => StatusCode::BadRequest,
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The maximum number of concurrent connections.
    pub max_connections: usize,
    /// The read buffer size.
    pub read_buffer_size: usize,
    /// How parameter conversion failures are reported.
    pub conversion_failure: ConversionPolicy,
    /// Opaque metadata attached to every request context.
    pub env: serde_json::Value,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            max_connections: 1024,
            read_buffer_size: 8192,
            conversion_failure: ConversionPolicy::default(),
            env: serde_json::Value::Null,
        }
    }
}
