//! Configuration schema definitions.
//!
//! All types derive Serde traits so partial overrides can be expressed as
//! data (tests do this); the running binary only ever uses the defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Name reported in startup and shutdown log lines.
pub const APP_NAME: &str = "DEMO APP V1";

/// Port the service listens on unless overridden.
pub const DEFAULT_PORT: u16 = 3000;

/// Environment variable read once at startup.
pub const POD_ENV_VAR: &str = "ENV_VAR";

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name used in lifecycle log lines.
    pub app_name: String,

    /// Name of the environment variable logged at startup.
    pub env_var: String,

    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            env_var: POD_ENV_VAR.to_string(),
            listener: ListenerConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub host: String,

    /// TCP port to bind.
    pub port: u16,
}

impl ListenerConfig {
    /// Bind address in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Port in the `:3000` form used by the health message.
    pub fn port_label(&self) -> String {
        format!(":{}", self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Timeout configuration, in seconds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Deadline for reading request headers on a connection.
    pub read_secs: u64,

    /// Deadline for producing a response once a request is read.
    pub write_secs: u64,

    /// Grace period for in-flight requests after a shutdown signal.
    pub shutdown_secs: u64,
}

impl TimeoutConfig {
    pub fn read(&self) -> Duration {
        Duration::from_secs(self.read_secs)
    }

    pub fn write(&self) -> Duration {
        Duration::from_secs(self.write_secs)
    }

    pub fn shutdown(&self) -> Duration {
        Duration::from_secs(self.shutdown_secs)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            read_secs: 15,
            write_secs: 15,
            shutdown_secs: 10,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployed_service() {
        let config = AppConfig::default();
        assert_eq!(config.app_name, "DEMO APP V1");
        assert_eq!(config.env_var, "ENV_VAR");
        assert_eq!(config.listener.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.listener.port_label(), ":3000");
        assert_eq!(config.timeouts.read(), Duration::from_secs(15));
        assert_eq!(config.timeouts.write(), Duration::from_secs(15));
        assert_eq!(config.timeouts.shutdown(), Duration::from_secs(10));
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"listener":{"port":28300},"timeouts":{"shutdown_secs":1}}"#)
                .unwrap();
        assert_eq!(config.listener.host, "0.0.0.0");
        assert_eq!(config.listener.port, 28300);
        assert_eq!(config.timeouts.shutdown_secs, 1);
        assert_eq!(config.timeouts.read_secs, 15);
        assert_eq!(config.observability.log_filter, "info");
    }
}
