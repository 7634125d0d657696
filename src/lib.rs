//! Health-check HTTP service.
//!
//! Serves `GET /api/v1/health`, answers everything else with a JSON 404,
//! logs every request, and drains connections on SIGINT/SIGTERM.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::{Shutdown, ShutdownOutcome};
