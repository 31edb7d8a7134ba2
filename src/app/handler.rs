//! Request handlers.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;

use crate::binding::{Error as BindingError, Param, Params};
use crate::response::{HttpException, IntoResponse, Response};

/// Type alias for a boxed future that returns a Result<Response, HandlerError>.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<Response, HandlerError>> + Send>>;

/// Type alias for a handler function that takes bound Params and returns a HandlerFuture.
pub type HandlerFn = Arc<dyn Fn(Params) -> HandlerFuture + Send + Sync>;

/// How a handler fails.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// An intentional, structured HTTP error.
    #[error(transparent)]
    Http(#[from] HttpException),

    /// A declared argument was missing or had the wrong shape.
    #[error(transparent)]
    Argument(#[from] BindingError),

    /// JSON serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Anything else.
    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl HandlerError {
    /// Wrap an arbitrary error or message.
    pub fn other(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        HandlerError::Other(err.into())
    }
}

/// A handler function together with its declared parameters.
#[derive(Clone)]
pub struct Handler {
    params: Arc<[Param]>,
    func: HandlerFn,
}

impl Handler {
    /// Wrap an async function taking bound [`Params`].
    ///
    /// The function may return anything that implements [`IntoResponse`].
    pub fn new<F, Fut, R>(params: Vec<Param>, handler: F) -> Self
    where
        F: Fn(Params) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, HandlerError>> + Send + 'static,
        R: IntoResponse + Send + 'static,
    {
        let func: HandlerFn = Arc::new(move |params: Params| -> HandlerFuture {
            let fut = handler(params);
            Box::pin(async move { fut.await.map(IntoResponse::into_response) })
        });

        Self {
            params: params.into(),
            func,
        }
    }

    /// The declared parameters.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Invoke the handler.
    pub fn call(&self, params: Params) -> HandlerFuture {
        (self.func)(params)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
