//! Bound handler arguments.

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::binding::error::Error;
use crate::context::RequestContext;

/// A single bound argument.
#[derive(Debug, Clone)]
pub enum Arg {
    /// A converted, raw or default value.
    Value(Value),
    /// The live request context.
    Context(Arc<RequestContext>),
}

/// The arguments a handler is called with, keyed by parameter name.
///
/// Parameters that could not be resolved are absent rather than null.
#[derive(Debug, Clone, Default)]
pub struct Params {
    args: HashMap<String, Arg>,
}

impl Params {
    /// Create an empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, arg: Arg) {
        self.args.insert(name.into(), arg);
    }

    /// Read a required argument as `T`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingArgument`] if the parameter was not bound, and
    /// [`Error::InvalidArgument`] if its value does not deserialize into `T`.
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Result<T, Error> {
        self.get_opt(name)?
            .ok_or_else(|| Error::MissingArgument(name.to_string()))
    }

    /// Read an optional argument as `T`.
    pub fn get_opt<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, Error> {
        match self.args.get(name) {
            None => Ok(None),
            Some(Arg::Value(value)) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| Error::InvalidArgument {
                    name: name.to_string(),
                    reason: e.to_string(),
                }),
            Some(Arg::Context(_)) => Err(Error::InvalidArgument {
                name: name.to_string(),
                reason: "bound to the request context".to_string(),
            }),
        }
    }

    /// Read the request context bound to `name`.
    pub fn context(&self, name: &str) -> Result<&Arc<RequestContext>, Error> {
        match self.args.get(name) {
            Some(Arg::Context(ctx)) => Ok(ctx),
            Some(Arg::Value(_)) => Err(Error::InvalidArgument {
                name: name.to_string(),
                reason: "not the request context".to_string(),
            }),
            None => Err(Error::MissingArgument(name.to_string())),
        }
    }

    /// The raw bound argument.
    pub fn arg(&self, name: &str) -> Option<&Arg> {
        self.args.get(name)
    }

    /// The bound value, if `name` is bound to a value.
    pub fn value(&self, name: &str) -> Option<&Value> {
        match self.args.get(name) {
            Some(Arg::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// Whether `name` was bound.
    pub fn contains(&self, name: &str) -> bool {
        self.args.contains_key(name)
    }

    /// Number of bound arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Whether nothing was bound.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}
