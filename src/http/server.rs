//! HTTP server setup and lifecycle.
//!
//! # Responsibilities
//! - Create the axum Router: health route plus catch-all fallback
//! - Wire up middleware (request logging, write timeout)
//! - Run the accept loop on a background task
//! - Drain connections on shutdown within the grace period

use std::net::SocketAddr;
use std::time::Duration;

use axum::{middleware, routing::any, Router};
use tokio::task::{JoinHandle, JoinSet};
use tower_http::timeout::TimeoutLayer;

use crate::config::AppConfig;
use crate::http::handlers::{health_check, listening_message, not_found, AppState};
use crate::http::middleware::log_request;
use crate::lifecycle::shutdown::{self, Shutdown, ShutdownOutcome, ShutdownSignal};
use crate::lifecycle::state::{Lifecycle, ServerState};
use crate::net::{serve_connection, ConnectionTracker, Listener};

/// Path of the health endpoint.
pub const HEALTH_PATH: &str = "/api/v1/health";

/// Pause after a failed accept before trying again.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Build the router with all middleware layers.
///
/// Both the health route and the fallback sit behind the logging layer.
#[allow(deprecated)]
pub fn routes(config: &AppConfig) -> Router {
    Router::new()
        .route(HEALTH_PATH, any(health_check))
        .fallback(not_found)
        .with_state(AppState::new(&config.listener))
        .layer(TimeoutLayer::new(config.timeouts.write()))
        .layer(middleware::from_fn(log_request))
}

/// HTTP server in the `Created` state.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
    lifecycle: Lifecycle,
}

impl HttpServer {
    /// Create a new HTTP server with the standard routes.
    pub fn new(config: AppConfig) -> Self {
        let router = routes(&config);
        Self::with_router(config, router)
    }

    /// Create a server around a prebuilt router.
    pub fn with_router(config: AppConfig, router: Router) -> Self {
        Self {
            router,
            config,
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn state(&self) -> ServerState {
        self.lifecycle.current()
    }

    /// Start accepting on `listener` in the background.
    ///
    /// The router is fixed from here on.
    pub fn start(self, listener: Listener) -> RunningServer {
        let local_addr = listener.local_addr().ok();
        let shutdown = Shutdown::new();
        let tracker = ConnectionTracker::new();

        tracing::info!("Routes:");
        tracing::info!("[GET] {}", HEALTH_PATH);
        tracing::info!("{}", listening_message(&self.config.listener.port_label()));

        let accept_task = tokio::spawn(accept_loop(
            listener,
            self.router,
            self.config.timeouts.read(),
            shutdown.subscribe(),
            tracker.clone(),
        ));
        self.lifecycle.advance(ServerState::Serving);

        RunningServer {
            local_addr,
            grace: self.config.timeouts.shutdown(),
            shutdown,
            tracker,
            lifecycle: self.lifecycle,
            accept_task,
        }
    }
}

/// HTTP server in the `Serving` state.
pub struct RunningServer {
    local_addr: Option<SocketAddr>,
    grace: Duration,
    shutdown: Shutdown,
    tracker: ConnectionTracker,
    lifecycle: Lifecycle,
    accept_task: JoinHandle<JoinSet<()>>,
}

impl RunningServer {
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    pub fn state(&self) -> ServerState {
        self.lifecycle.current()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle.clone()
    }

    /// Number of open client connections.
    pub fn active_connections(&self) -> u64 {
        self.tracker.active_count()
    }

    /// Stop accepting, let in-flight requests finish, and stop.
    ///
    /// Connections still open when the grace period ends are aborted and the
    /// outcome is `Forced`.
    pub async fn shutdown(self) -> ShutdownOutcome {
        self.lifecycle.advance(ServerState::ShuttingDown);
        self.shutdown.trigger();

        let mut connections = match self.accept_task.await {
            Ok(connections) => connections,
            Err(e) => {
                tracing::error!(error = %e, "Accept loop failed");
                JoinSet::new()
            }
        };

        tracing::debug!(
            active_connections = self.tracker.active_count(),
            grace = ?self.grace,
            "Draining connections"
        );

        let outcome = shutdown::drain(&self.tracker, self.grace).await;
        if outcome == ShutdownOutcome::Forced {
            tracing::error!("Server forced to shutdown");
        }

        connections.shutdown().await;
        self.lifecycle.advance(ServerState::Stopped);

        outcome
    }
}

/// Accept connections until shutdown, serving each on its own task.
///
/// Returns the still-running connection tasks so the caller can drain or
/// abort them. The listener is dropped on return, refusing new connections.
async fn accept_loop(
    listener: Listener,
    router: Router,
    read_timeout: Duration,
    mut shutdown: ShutdownSignal,
    tracker: ConnectionTracker,
) -> JoinSet<()> {
    let mut connections = JoinSet::new();

    loop {
        tokio::select! {
            biased;
            _ = shutdown.wait() => break,
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    let guard = tracker.track();
                    connections.spawn(serve_connection(
                        stream,
                        peer,
                        router.clone(),
                        read_timeout,
                        shutdown.clone(),
                        guard,
                    ));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Accept failed");
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                }
            },
            Some(_) = connections.join_next(), if !connections.is_empty() => {}
        }
    }

    drop(listener);
    tracing::info!(in_flight = connections.len(), "HTTP server stopped");

    connections
}
