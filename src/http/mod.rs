//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (net::connection)
//!     → server.rs (router: health route + catch-all fallback)
//!     → middleware/logging.rs (start line, timing)
//!     → handlers.rs (health_check / not_found)
//!     → response.rs (StatusResponse → JSON with explicit length)
//!     → observer.rs (status capture)
//!     → middleware/logging.rs (finish line)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod observer;
pub mod response;
pub mod server;

pub use handlers::{health_check, not_found, AppState};
pub use observer::ResponseObserver;
pub use response::StatusResponse;
pub use server::{routes, HttpServer, RunningServer, HEALTH_PATH};
