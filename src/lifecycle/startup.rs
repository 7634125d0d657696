//! Startup orchestration.
//!
//! # Responsibilities
//! - Log the service identity and the pod environment value
//! - Bind the listener and start serving
//! - Hold the main task on the shutdown signal, then run the drain
//!
//! # Design Decisions
//! - Fail fast: a bind failure is logged and returned, the process exits
//! - Listener binds before the server starts so the port is known to be ours

use std::future::Future;

use crate::config::LoadedConfig;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::ShutdownOutcome;
use crate::net::{Listener, ListenerError};

/// Run the service until `signal` resolves, then shut it down.
pub async fn run<F>(loaded: LoadedConfig, signal: F) -> Result<ShutdownOutcome, ListenerError>
where
    F: Future<Output = ()>,
{
    let LoadedConfig { config, env_value } = loaded;
    let app_name = config.app_name.clone();

    tracing::info!("starting {}", app_name);
    tracing::info!("got [{}] from pod {}", env_value, config.env_var);

    let listener = Listener::bind(&config.listener).await.inspect_err(|e| {
        tracing::error!("{}", e);
    })?;

    let running = HttpServer::new(config).start(listener);

    signal.await;

    let outcome = running.shutdown().await;
    tracing::info!("shutting down {} gracefully", app_name);

    Ok(outcome)
}
