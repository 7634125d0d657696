//! Route handlers.
//!
//! # Responsibilities
//! - `health_check`: liveness answer for GET, everything else is not found
//! - `not_found`: catch-all naming the method and request target
//!
//! # Design Decisions
//! - Handlers read only the request and `AppState`, so repeated requests
//!   produce byte-identical responses

use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::Response,
};

use crate::config::ListenerConfig;
use crate::http::response::{json_response, StatusResponse};

/// Message reported by the health route and logged at startup.
pub fn listening_message(port_label: &str) -> String {
    format!("listenning and serving on port {}", port_label)
}

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    health_status: Arc<str>,
}

impl AppState {
    pub fn new(listener: &ListenerConfig) -> Self {
        Self {
            health_status: listening_message(&listener.port_label()).into(),
        }
    }

    pub fn health_status(&self) -> &str {
        &self.health_status
    }
}

/// Health check. Non-GET requests get the not-found response.
pub async fn health_check(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET {
        return not_found(method, uri).await;
    }

    json_response(StatusCode::OK, &StatusResponse::new(state.health_status()))
}

/// Fallback for undefined paths.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    let status = StatusResponse::new(format!("not found [{}] {}", method, uri));
    json_response(StatusCode::NOT_FOUND, &status)
}
