//! Request logging middleware.
//!
//! Two info lines per request, `starting request [GET] /path` before the
//! handler runs and `finishing request [GET] /path | statusCode: 200 | latency: ..`
//! after it returns. A panicking handler skips the second line.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

use crate::http::observer::ResponseObserver;

/// Middleware function logging request start and completion.
pub async fn log_request(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    tracing::info!("starting request [{}] {}", method, uri);

    let mut observer = ResponseObserver::new();
    let response = observer.observe(next.run(request).await);

    tracing::info!(
        "finishing request [{}] {} | statusCode: {} | latency: {:?}",
        method,
        uri,
        observer.status_code.as_u16(),
        started.elapsed()
    );

    response
}
