//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Log identity → Bind listener → Start server → Wait for signal
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//!
//! State (state.rs):
//!     Created → Serving → ShuttingDown → Stopped
//! ```
//!
//! # Design Decisions
//! - Signal handlers are registered before the server starts serving
//! - Shutdown has timeout: remaining connections are abandoned after deadline
//! - One-shot: a stopped server is never restarted

pub mod shutdown;
pub mod signals;
pub mod startup;
pub mod state;

pub use shutdown::{Shutdown, ShutdownOutcome, ShutdownSignal};
pub use signals::Signals;
pub use state::{Lifecycle, ServerState};
