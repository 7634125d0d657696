//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! compiled-in defaults (schema.rs)
//!     → loader.rs (read the pod environment variable)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → handed by value to the server at startup
//! ```
//!
//! # Design Decisions
//! - No config file and no CLI flags: the only external input is one
//!   environment variable, which is logged and otherwise unused
//! - All fields have defaults matching the deployed service
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{env_lookup, load_config, ConfigError, LoadedConfig};
pub use schema::AppConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::TimeoutConfig;
