//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: {reason}")]
    Env { var: &'static str, reason: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Deserialize configuration from a TOML string. Validation happens once all
/// overrides are applied.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Read configuration from a TOML file, or built-in defaults without one.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(path) => parse_config(&fs::read_to_string(path)?),
        None => Ok(AppConfig::default()),
    }
}

/// Resolve the effective configuration: file (or defaults), environment
/// overrides, the command-line bind address, then validation.
pub fn resolve_config(path: Option<&Path>, bind: Option<&str>) -> Result<AppConfig, ConfigError> {
    let config = load_config(path)?;
    finalize_config(config, bind, |key| std::env::var(key).ok())
}

fn finalize_config<F>(mut config: AppConfig, bind: Option<&str>, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    apply_env_overrides(&mut config, lookup)?;
    if let Some(bind) = bind {
        config.listener.bind_address = bind.trim().to_string();
    }
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply environment overrides on top of file values.
///
/// `lookup` is injected so tests never touch the process environment.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup("APP_ENV") {
        config.environment = raw
            .parse()
            .map_err(|reason| ConfigError::Env { var: "APP_ENV", reason })?;
    }

    if let Some(addr) = lookup("BIND_ADDRESS") {
        config.listener.bind_address = addr.trim().to_string();
    }

    if let Some(raw) = lookup("COOKIE_SECURE") {
        let secure = parse_bool(&raw).ok_or_else(|| ConfigError::Env {
            var: "COOKIE_SECURE",
            reason: format!("expected a boolean, got '{raw}'"),
        })?;
        config.cookie.secure = Some(secure);
    }

    if let Some(level) = lookup("LOG_LEVEL") {
        config.observability.log_level = Some(level.trim().to_string());
    }

    Ok(())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
