//! Route registration and dispatch.

use std::future::Future;
use std::sync::Arc;

use log::{debug, info};

use crate::app::error::Error;
use crate::app::handler::{Handler, HandlerError};
use crate::binding::{bind, Param, Params};
use crate::context::RequestContext;
use crate::response::{IntoResponse, Response, StatusCode};
use crate::routing::{Error as RouteError, PathParams, RouteTable};

/// Body of the built-in not-found outcome.
const NOT_FOUND_BODY: &str = "Not Found";

/// A router application.
///
/// Routes are matched in registration order and the first route whose method
/// and template both match wins. Unmatched calls go to a built-in handler that
/// answers `404 Not Found`.
#[derive(Debug)]
pub struct App {
    routes: RouteTable<Handler>,
    not_found: Handler,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create an application with no routes.
    pub fn new() -> Self {
        Self {
            routes: RouteTable::new(),
            not_found: Handler::new(Vec::new(), |_params: Params| async {
                Ok::<_, HandlerError>(
                    Response::new(NOT_FOUND_BODY).with_status(StatusCode::NotFound.as_u16()),
                )
            }),
        }
    }

    /// Register a handler for `method` and a route template.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method, matched case-insensitively
    /// * `template` - A path with `{name}` placeholders, e.g. `/items/{item_id}`
    /// * `params` - The handler's declared parameters
    /// * `handler` - The async handler function
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] if the template reuses a placeholder name.
    pub fn route<F, Fut, R>(
        &mut self,
        method: &str,
        template: &str,
        params: Vec<Param>,
        handler: F,
    ) -> Result<&mut Self, RouteError>
    where
        F: Fn(Params) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, HandlerError>> + Send + 'static,
        R: IntoResponse + Send + 'static,
    {
        self.register(method, template, Handler::new(params, handler))
    }

    /// Register an already built [`Handler`].
    pub fn register(
        &mut self,
        method: &str,
        template: &str,
        handler: Handler,
    ) -> Result<&mut Self, RouteError> {
        self.routes.register(template, method, handler)?;
        info!("Registered route {} {template}", method.to_ascii_uppercase());
        Ok(self)
    }

    /// Register a `GET` handler.
    pub fn get<F, Fut, R>(
        &mut self,
        template: &str,
        params: Vec<Param>,
        handler: F,
    ) -> Result<&mut Self, RouteError>
    where
        F: Fn(Params) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, HandlerError>> + Send + 'static,
        R: IntoResponse + Send + 'static,
    {
        self.route("get", template, params, handler)
    }

    /// Register a `POST` handler.
    pub fn post<F, Fut, R>(
        &mut self,
        template: &str,
        params: Vec<Param>,
        handler: F,
    ) -> Result<&mut Self, RouteError>
    where
        F: Fn(Params) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, HandlerError>> + Send + 'static,
        R: IntoResponse + Send + 'static,
    {
        self.route("post", template, params, handler)
    }

    /// Register a `PUT` handler.
    pub fn put<F, Fut, R>(
        &mut self,
        template: &str,
        params: Vec<Param>,
        handler: F,
    ) -> Result<&mut Self, RouteError>
    where
        F: Fn(Params) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, HandlerError>> + Send + 'static,
        R: IntoResponse + Send + 'static,
    {
        self.route("put", template, params, handler)
    }

    /// Register a `HEAD` handler.
    pub fn head<F, Fut, R>(
        &mut self,
        template: &str,
        params: Vec<Param>,
        handler: F,
    ) -> Result<&mut Self, RouteError>
    where
        F: Fn(Params) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, HandlerError>> + Send + 'static,
        R: IntoResponse + Send + 'static,
    {
        self.route("head", template, params, handler)
    }

    /// The route table.
    pub fn routes(&self) -> &RouteTable<Handler> {
        &self.routes
    }

    /// Find the handler for a method and path.
    ///
    /// Falls back to the built-in not-found handler with no path parameters.
    pub fn dispatch(&self, method: &str, path: &str) -> (&Handler, PathParams) {
        match self.routes.find(method, path) {
            Some((route, path_params)) => {
                debug!("{method} {path} matched {}", route.pattern().template());
                (route.handler(), path_params)
            }
            None => {
                debug!("{method} {path} matched no route");
                (&self.not_found, PathParams::new())
            }
        }
    }

    /// Run one call through dispatch, binding and the handler.
    ///
    /// A structured [`HttpException`](crate::response::HttpException) from the
    /// handler becomes its response here.
    ///
    /// # Errors
    ///
    /// Conversion failures, missing arguments and any other handler failure are
    /// returned for the caller to map to a status.
    pub async fn handle(&self, ctx: RequestContext) -> Result<Response, Error> {
        let ctx = Arc::new(ctx);
        let (handler, path_params) = self.dispatch(ctx.method(), ctx.path());
        let params = bind(&ctx, handler.params(), &path_params)?;

        match handler.call(params).await {
            Ok(response) => Ok(response),
            Err(HandlerError::Http(exc)) => {
                debug!("Handler raised {exc}");
                exc.to_response()
                    .ok_or_else(|| Error::UnknownStatus(exc.status_code()))
            }
            Err(HandlerError::Argument(e)) => Err(e.into()),
            Err(HandlerError::Json(e)) => Err(e.into()),
            Err(HandlerError::Other(e)) => Err(Error::Handler(e)),
        }
    }
}
