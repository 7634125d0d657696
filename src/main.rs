//! demo-app (v1)
//!
//! A minimal HTTP service exposing a health check, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request      ┌──────────┐    ┌────────────┐    ┌──────────────┐
//!     ───────────────────▶│   net    │───▶│  logging   │───▶│   handlers   │
//!                         │ listener │    │ middleware │    │ health / 404 │
//!                         └──────────┘    └─────┬──────┘    └──────┬───────┘
//!     Client Response                           │  observer        │
//!     ◀─────────────────────────────────────────┴◀─────────────────┘
//!
//!     SIGINT/SIGTERM ──▶ lifecycle: stop accepting → drain (10s) → exit
//! ```

use demo_app::config::{env_lookup, load_config, AppConfig};
use demo_app::lifecycle::{startup, Signals};
use demo_app::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::default();

    logging::init(&config.observability)?;

    let loaded = load_config(config, env_lookup).inspect_err(|e| {
        tracing::error!("{}", e);
    })?;

    let mut signals = Signals::register()?;

    startup::run(loaded, async move {
        signals.recv().await;
    })
    .await?;

    Ok(())
}
