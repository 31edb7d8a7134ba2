//! Resolving declared parameters against a request.

use std::sync::Arc;

use log::trace;

use crate::binding::error::Error;
use crate::binding::param::Param;
use crate::binding::params::{Arg, Params};
use crate::context::RequestContext;
use crate::routing::PathParams;

/// Bind each declared parameter.
///
/// Resolution order per parameter:
///
/// 1. a context parameter receives `ctx` itself;
/// 2. a captured path parameter of the same name, converted to the declared type;
/// 3. the first query value of the same name, converted the same way;
/// 4. the declared default, unconverted;
/// 5. otherwise the parameter is left out.
///
/// # Errors
///
/// Returns [`Error::Conversion`] as soon as a declared type rejects its input.
pub fn bind(
    ctx: &Arc<RequestContext>,
    params: &[Param],
    path_params: &PathParams,
) -> Result<Params, Error> {
    let mut bound = Params::new();

    for param in params {
        let name = param.name();

        if param.wants_context() {
            bound.insert(name, Arg::Context(Arc::clone(ctx)));
        } else if let Some(raw) = path_params.get(name) {
            bound.insert(name, Arg::Value(param.convert(raw)?));
        } else if let Some(raw) = ctx.query_param(name) {
            bound.insert(name, Arg::Value(param.convert(raw)?));
        } else if let Some(default) = param.default_value() {
            bound.insert(name, Arg::Value(default.clone()));
        } else {
            trace!("Parameter {name} not supplied, leaving it unbound");
        }
    }

    Ok(bound)
}
