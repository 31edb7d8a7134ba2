//! A minimal HTTP request router.
//!
//! This library maps an incoming method and path to a registered handler,
//! binds the handler's declared parameters from the path, the query string or
//! defaults, and turns the result into a uniform response.
//!
//! # Features
//!
//! - Route templates with `{name}` placeholders, matched in registration order
//! - Declared handler parameters with type conversion (`int`, `float`, `bool`, custom)
//! - Structured HTTP errors that short-circuit a handler with a status and detail
//! - JSON and HTML response helpers
//! - A small tokio-based HTTP/1.1 server to host an application
//!
//! # Examples
//!
//! ## Routing and parameter binding
//!
//! ```
//! use std::collections::HashMap;
//! use microroute_rs::{App, HandlerError, Param, ParamType, Params, RequestContext, Response};
//!
//! # tokio_test_block(async {
//! let mut app = App::new();
//! app.get(
//!     "/items/{item_id}",
//!     vec![
//!         Param::new("item_id").typed(ParamType::Int),
//!         Param::new("verbose").typed(ParamType::Bool).with_default(false),
//!     ],
//!     |params: Params| async move {
//!         let item_id: i64 = params.get("item_id")?;
//!         let verbose: bool = params.get("verbose")?;
//!         Ok::<_, HandlerError>(Response::json(&(item_id, verbose))?)
//!     },
//! )
//! .unwrap();
//!
//! let ctx = RequestContext::new("GET", "/items/42?verbose=true", HashMap::new()).unwrap();
//! let response = app.handle(ctx).await.unwrap();
//! assert_eq!(response.status, 200);
//! assert_eq!(response.body_text(), "[42,true]");
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```
//!
//! ## Structured errors
//!
//! ```
//! use microroute_rs::HttpException;
//!
//! let exc = HttpException::new(404);
//! assert_eq!(exc.detail(), Some("Not Found"));
//! assert_eq!(exc.to_string(), "404: Not Found");
//! ```
//!
//! See the `demos` directory for a complete server.

// Export the routing module
pub mod routing;

// Export the request context module
pub mod context;

// Export the parameter binding module
pub mod binding;

// Export the response module
pub mod response;

// Export the application module
pub mod app;

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use app::{App, Error as AppError, Handler, HandlerError};
pub use binding::{Error as BindingError, Param, ParamType, Params};
pub use context::RequestContext;
pub use parser::{parse_request, Error as ParserError, HttpRequest, HttpVersion};
pub use response::{HttpException, IntoResponse, Response, StatusCode};
pub use routing::{CompiledPattern, Error as RouteError, RouteTable};
pub use server::{ConversionPolicy, Error as ServerError, HttpServer, ServerConfig};
