//! The ordered, append-only route table.

use crate::routing::error::Error;
use crate::routing::pattern::{CompiledPattern, PathParams};

/// A registered route: a compiled template, a lowercased method and a handler.
#[derive(Debug, Clone)]
pub struct Route<H> {
    pattern: CompiledPattern,
    method: String,
    handler: H,
}

impl<H> Route<H> {
    /// Compile `template` and build a route for `method`.
    pub fn new(template: &str, method: &str, handler: H) -> Result<Self, Error> {
        Ok(Self {
            pattern: CompiledPattern::compile(template)?,
            method: method.to_ascii_lowercase(),
            handler,
        })
    }

    /// Match a method and path against this route.
    ///
    /// The method comparison is case-insensitive. Returns the captured path
    /// parameters when both the method and the whole path match.
    pub fn matches(&self, method: &str, path: &str) -> Option<PathParams> {
        if !self.method.eq_ignore_ascii_case(method) {
            return None;
        }
        self.pattern.matches(path)
    }

    /// The compiled template.
    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// Placeholder names in declaration order.
    pub fn param_names(&self) -> &[String] {
        self.pattern.param_names()
    }

    /// The lowercased method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The handler bound to this route.
    pub fn handler(&self) -> &H {
        &self.handler
    }
}

/// Routes in registration order.
///
/// Nothing is merged or deduplicated: registering the same template twice adds
/// two entries and the earlier one always wins.
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    routes: Vec<Route<H>>,
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteTable<H> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Compile `template` and append a route for it.
    pub fn register(&mut self, template: &str, method: &str, handler: H) -> Result<(), Error> {
        self.routes.push(Route::new(template, method, handler)?);
        Ok(())
    }

    /// Find the first route, in registration order, matching `method` and `path`.
    pub fn find(&self, method: &str, path: &str) -> Option<(&Route<H>, PathParams)> {
        self.routes
            .iter()
            .find_map(|route| route.matches(method, path).map(|params| (route, params)))
    }

    /// Iterate over routes in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Route<H>> {
        self.routes.iter()
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no routes have been registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
