//! HTTP server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;

use crate::app::{App, Error as AppError};
use crate::binding::Error as BindingError;
use crate::context::RequestContext;
use crate::parser::parse_request;
use crate::response::{Response, StatusCode};
use crate::server::config::{ConversionPolicy, ServerConfig};
use crate::server::error::Error;

/// An HTTP server serving one [`App`].
pub struct HttpServer {
    /// The server configuration.
    pub config: Arc<ServerConfig>,
    /// The application; read-only once serving starts.
    pub app: Arc<App>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and application.
    pub fn new(config: ServerConfig, app: App) -> Self {
        Self {
            config: Arc::new(config),
            app: Arc::new(app),
        }
    }

    /// Log the registered endpoints.
    fn display_server_info(&self) {
        info!("Registered endpoints:");
        for route in self.app.routes().iter() {
            info!(
                "  {method} {template}",
                method = route.method().to_ascii_uppercase(),
                template = route.pattern().template()
            );
        }
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = self.config.addr);
        Ok(listener)
    }

    /// Set up a Ctrl+C handler for graceful shutdown.
    fn setup_ctrl_c_handler(shutdown_tx: Arc<mpsc::Sender<()>>, tasks: &mut JoinSet<()>) {
        tasks.spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    let _ = shutdown_tx.send(()).await;
                }
                Err(e) => {
                    error!("Error setting up Ctrl+C handler: {e}");
                }
            }
        });
    }

    /// Handle a new connection.
    fn handle_new_connection(
        mut socket: tokio::net::TcpStream,
        addr: SocketAddr,
        semaphore: Arc<Semaphore>,
        app: Arc<App>,
        config: Arc<ServerConfig>,
        tasks: &mut JoinSet<()>,
    ) {
        // Try to acquire a permit from the semaphore
        let Ok(permit) = semaphore.try_acquire_owned() else {
            warn!("Connection limit reached, rejecting connection from {addr}");
            tasks.spawn(async move {
                let response = text_response(StatusCode::ServiceUnavailable);
                let _ = socket.write_all(&response.to_bytes()).await;
            });
            return;
        };

        tasks.spawn(async move {
            // The permit is dropped when the task completes, releasing the semaphore slot
            let _permit = permit;

            if let Err(e) = Self::handle_connection(&mut socket, &app, &config).await {
                error!("Error handling connection from {addr}: {e}");
            }
        });
    }

    /// Handle connection errors. Returns true if the accept loop should stop.
    async fn handle_connection_error(e: std::io::Error) -> bool {
        error!("Error accepting connection: {e}");

        if e.kind() == std::io::ErrorKind::BrokenPipe {
            error!("Critical error accepting connection, shutting down");
            return true;
        }

        // For other errors, wait a bit before retrying
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
        false
    }

    /// Perform graceful shutdown.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let shutdown_timeout = tokio::time::Duration::from_secs(30);
        let drained = tokio::time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    error!("Task failed during shutdown: {e}");
                }
            }
        })
        .await;

        if drained.is_err() {
            warn!("Shutdown timed out, aborting {len} connections", len = tasks.len());
            tasks.abort_all();
        }
        info!("Server shutdown complete");
    }

    /// Start the server and listen for incoming connections.
    pub async fn start(&self) -> Result<(), Error> {
        self.display_server_info();

        let listener = self.setup_listener().await?;

        // Limit concurrent connections
        let semaphore = Arc::new(Semaphore::new(self.config.max_connections));

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let shutdown_tx = Arc::new(shutdown_tx);

        // Use JoinSet to keep track of all spawned tasks
        let mut tasks = JoinSet::new();
        Self::setup_ctrl_c_handler(shutdown_tx.clone(), &mut tasks);

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("Shutting down server...");
                    break;
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            Self::handle_new_connection(
                                socket,
                                addr,
                                semaphore.clone(),
                                self.app.clone(),
                                self.config.clone(),
                                &mut tasks,
                            );
                        }
                        Err(e) => {
                            if Self::handle_connection_error(e).await {
                                break;
                            }
                        }
                    }
                }
            }
        }

        Self::perform_shutdown(&mut tasks).await;

        Ok(())
    }

    /// Handle a single connection: read one request, answer it.
    ///
    /// Every outcome, including failures, is written back before returning.
    /// The returned error only reports what went wrong.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        app: &App,
        config: &ServerConfig,
    ) -> Result<(), Error> {
        let mut buf = vec![0; config.read_buffer_size];

        // Read data from the socket
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            return Ok(()); // Connection closed
        }

        // Parse the HTTP request
        let request = match parse_request(&buf[..n]) {
            Ok(req) => req,
            Err(e) => {
                let response = text_response(StatusCode::BadRequest);
                socket.write_all(&response.to_bytes()).await?;
                return Err(Error::ParseError(e));
            }
        };
        let head_only = request.method.eq_ignore_ascii_case("HEAD");

        // Build the request context
        let host = request.get_header("Host").cloned();
        let ctx = RequestContext::from_target(
            request.method,
            host.as_deref(),
            &request.target,
            request.headers,
        );
        let ctx = match ctx {
            Ok(ctx) => ctx.with_env(config.env.clone()),
            Err(e) => {
                let response = text_response(StatusCode::BadRequest);
                socket.write_all(&response.to_bytes()).await?;
                return Err(Error::ContextError(e));
            }
        };
        debug!("{method} {url}", method = ctx.method(), url = ctx.url());

        // Run the application
        let (response, failure) = match app.handle(ctx).await {
            Ok(response) => (response, None),
            Err(e) => {
                let status = failure_status(&e, config.conversion_failure);
                warn!("Request failed, answering {status}: {e}", status = status.as_u16());
                (text_response(status), Some(e))
            }
        };

        // Send the response
        let mut bytes = response.to_bytes();
        if head_only {
            bytes.truncate(bytes.len() - response.body.len());
        }
        socket.write_all(&bytes).await?;

        match failure {
            Some(e) => Err(Error::AppError(e)),
            None => Ok(()),
        }
    }
}

/// The status for a failure that escaped the app.
fn failure_status(e: &AppError, policy: ConversionPolicy) -> StatusCode {
    match e {
        AppError::Binding(BindingError::Conversion { .. }) => policy.status(),
        _ => StatusCode::InternalServerError,
    }
}

/// A plain-text response whose body is the reason phrase.
fn text_response(status: StatusCode) -> Response {
    Response::new(status.reason_phrase())
        .with_status(status.as_u16())
        .with_header("Content-Type", "text/plain")
}
