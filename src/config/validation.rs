//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that every configured path is a same-origin absolute path
//! - Check that the login flow cannot gate itself
//! - Validate value ranges (timeouts > 0, body limit > 0, length bounds)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::auth::redirect::sanitize_redirect_path;
use crate::config::schema::AppConfig;
use crate::security::headers::parse_header;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    let auth = &config.auth;
    for (field, value) in [
        ("auth.login_path", &auth.login_path),
        ("auth.home_path", &auth.home_path),
        ("cookie.path", &config.cookie.path),
    ] {
        if !value.starts_with('/') {
            errors.push(ValidationError::new(field, "must start with '/'"));
        }
    }

    // The fallback itself must survive the sanitizer, or every login would
    // redirect to a path the service refuses to emit.
    let default_redirect = &config.app.default_redirect;
    if sanitize_redirect_path(Some(default_redirect.as_str()), "") != *default_redirect {
        errors.push(ValidationError::new(
            "app.default_redirect",
            "must be a plain same-origin path",
        ));
    }

    if auth.protected_prefixes.is_empty() {
        errors.push(ValidationError::new(
            "auth.protected_prefixes",
            "at least one protected prefix is required",
        ));
    }
    for (i, prefix) in auth.protected_prefixes.iter().enumerate() {
        if !prefix.starts_with('/') || prefix == "/" {
            errors.push(ValidationError::new(
                format!("auth.protected_prefixes[{i}]"),
                format!("'{prefix}' must start with '/' and name a sub-path"),
            ));
        }
        if auth.login_path.starts_with(prefix.as_str()) {
            errors.push(ValidationError::new(
                format!("auth.protected_prefixes[{i}]"),
                format!("'{prefix}' would gate the login page"),
            ));
        }
    }

    if auth.session_cookie.is_empty() || !auth.session_cookie.chars().all(is_cookie_token_char) {
        errors.push(ValidationError::new(
            "auth.session_cookie",
            "must be a non-empty cookie token",
        ));
    }
    if auth.redirect_param.is_empty() {
        errors.push(ValidationError::new("auth.redirect_param", "must not be empty"));
    }

    let rules = &config.validation.username;
    if rules.min_length == 0 {
        errors.push(ValidationError::new(
            "validation.username.min_length",
            "must be at least 1",
        ));
    }
    if rules.min_length > rules.max_length {
        errors.push(ValidationError::new(
            "validation.username",
            "min_length exceeds max_length",
        ));
    }

    for (name, value) in &config.security.response_headers {
        if parse_header(name, value).is_none() {
            errors.push(ValidationError::new(
                format!("security.response_headers.{name}"),
                "not a valid header name/value",
            ));
        }
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::new("security.max_body_size", "must be > 0"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be > 0"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// RFC 6265 cookie-name token: visible ASCII minus separators.
fn is_cookie_token_char(c: char) -> bool {
    c.is_ascii_graphic() && !"()<>@,;:\\\"/[]?={}".contains(c)
}
