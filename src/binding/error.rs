//! Error types for parameter binding.

use thiserror::Error;

/// Errors that can occur while binding or reading handler parameters.
#[derive(Debug, Error)]
pub enum Error {
    /// A supplied string could not be converted to the declared type.
    #[error("Cannot convert parameter {name}={value:?} to {target}: {reason}")]
    Conversion {
        /// The parameter name.
        name: String,
        /// The raw value taken from the path or query string.
        value: String,
        /// The declared target type.
        target: String,
        /// Why the conversion failed.
        reason: String,
    },

    /// The handler asked for a parameter that was not bound.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// A bound parameter cannot be read as the requested type.
    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument {
        /// The parameter name.
        name: String,
        /// Why the value could not be read.
        reason: String,
    },
}
