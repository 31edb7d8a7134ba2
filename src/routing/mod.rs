//! Route templates and the route table.
//!
//! A route template is a path made of literal text and `{name}` placeholders.
//! Templates are compiled once at registration time into a [`CompiledPattern`]
//! and appended to a [`RouteTable`], which is scanned in registration order.

mod error;
mod pattern;
mod table;

// Re-export public items
pub use error::Error;
pub use pattern::{CompiledPattern, PathParams};
pub use table::{Route, RouteTable};
