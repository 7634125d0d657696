//! Startup configuration loading.

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validated configuration plus the environment value read at startup.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    /// Value of the pod variable, empty when unset.
    pub env_value: String,
}

/// Process environment lookup used by the binary.
///
/// Non-UTF-8 values are kept, with invalid bytes replaced, rather than read as
/// unset.
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
}

/// Validate `config` and read its pod variable through `lookup`.
///
/// `lookup` is `env_lookup` in the binary; tests pass a closure so they never
/// touch the process environment.
pub fn load_config<F>(config: AppConfig, lookup: F) -> Result<LoadedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    validate_config(&config).map_err(ConfigError::Validation)?;

    let env_value = lookup(&config.env_var).unwrap_or_default();

    Ok(LoadedConfig { config, env_value })
}
