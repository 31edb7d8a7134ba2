//! Error types for route registration.

use thiserror::Error;

/// Errors that can occur while compiling a route template.
#[derive(Debug, Error)]
pub enum Error {
    /// The same placeholder name appears more than once in a template.
    #[error("Duplicate placeholder {{{name}}} in route template: {template}")]
    DuplicatePlaceholder {
        /// The offending template.
        template: String,
        /// The repeated placeholder name.
        name: String,
    },

    /// The template could not be turned into a matcher.
    #[error("Invalid route pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
