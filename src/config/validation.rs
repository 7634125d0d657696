//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, host is an IP address)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use std::net::IpAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener host `{0}` is not an IP address")]
    InvalidHost(String),

    #[error("timeout `{0}` must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("app_name must not be empty")]
    EmptyAppName,
}

/// Check the configuration, collecting every error found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.parse::<IpAddr>().is_err() {
        errors.push(ValidationError::InvalidHost(config.listener.host.clone()));
    }

    let timeouts = [
        ("read_secs", config.timeouts.read_secs),
        ("write_secs", config.timeouts.write_secs),
        ("shutdown_secs", config.timeouts.shutdown_secs),
    ];
    for (name, secs) in timeouts {
        if secs == 0 {
            errors.push(ValidationError::ZeroTimeout(name));
        }
    }

    if config.app_name.trim().is_empty() {
        errors.push(ValidationError::EmptyAppName);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
