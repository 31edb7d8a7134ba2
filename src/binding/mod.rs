//! Handler parameter declarations and binding.
//!
//! Each handler declares its parameters up front as a list of [`Param`]
//! descriptors. At dispatch time [`bind`] resolves every descriptor against the
//! captured path parameters and the request context, producing the [`Params`]
//! the handler is called with.

mod binder;
mod error;
mod param;
mod params;

// Re-export public items
pub use binder::bind;
pub use error::Error;
pub use param::{Converter, Param, ParamType};
pub use params::{Arg, Params};
