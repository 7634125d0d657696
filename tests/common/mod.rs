//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::time::Duration;

use demo_app::config::AppConfig;
use demo_app::http::{HttpServer, RunningServer};
use demo_app::net::Listener;
use demo_app::observability::logging::{self, capture::CapturedLogs};
use tracing_subscriber::EnvFilter;

/// Default config bound to loopback on `port`.
pub fn config_on(port: u16) -> AppConfig {
    let mut config = AppConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.listener.port = port;
    config
}

/// Bind and start a server with the standard routes.
#[allow(dead_code)]
pub async fn start_server(config: AppConfig) -> RunningServer {
    let listener = Listener::bind(&config.listener).await.unwrap();
    HttpServer::new(config).start(listener)
}

/// Wait for the server to answer, retrying with backoff.
#[allow(dead_code)]
pub async fn wait_for_server(addr: SocketAddr, max_retries: u32) -> reqwest::Client {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let mut delay = Duration::from_millis(10);

    for attempt in 1..=max_retries {
        match client
            .get(format!("http://{}/api/v1/health", addr))
            .timeout(Duration::from_millis(200))
            .send()
            .await
        {
            Ok(_) => return client,
            Err(_) if attempt < max_retries => {
                tokio::time::sleep(delay).await;
                delay = std::cmp::min(delay * 2, Duration::from_millis(200));
            }
            Err(e) => panic!("Server not ready after {} attempts: {}", max_retries, e),
        }
    }
    client
}

/// Route this thread's log events into a fresh buffer.
///
/// Use on a current-thread runtime so spawned server tasks log into it too.
#[allow(dead_code)]
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = logging::subscriber(EnvFilter::new("info"), logs.make_writer());
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

/// Poll `check` every 10ms until it holds or `timeout` elapses.
#[allow(dead_code)]
pub async fn eventually<F: Fn() -> bool>(timeout: Duration, check: F) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
