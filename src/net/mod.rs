//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (bind, accept)
//!     → connection.rs (lifecycle tracking, hyper HTTP/1.1 serving)
//!     → Hand off to the axum router
//!
//! Connection States:
//!     Active → Draining → Closed
//! ```
//!
//! # Design Decisions
//! - Each connection tracked for graceful shutdown
//! - Header read timeout enforced per connection

pub mod connection;
pub mod listener;

pub use connection::{serve_connection, ConnectionGuard, ConnectionId, ConnectionTracker};
pub use listener::{Listener, ListenerError};
