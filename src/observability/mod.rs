//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (info!, warn!, error!)
//!     → logging.rs (filter + plain-text line format)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - One subscriber, built explicitly at startup from config
//! - Lines are for humans: `LEVEL-` prefix, timestamp, `file:line`
//! - Log writes are best-effort and never fail a request

pub mod logging;
