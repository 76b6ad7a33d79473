//! Request limits.
//!
//! # Responsibilities
//! - Enforce maximum request body size (413 Payload Too Large)
//! - Bound total request time (408 Request Timeout)

use std::time::Duration;

use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer};

use crate::config::AppConfig;

pub fn body_limit_layer(config: &AppConfig) -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(config.security.max_body_size)
}

#[allow(deprecated)]
pub fn timeout_layer(config: &AppConfig) -> TimeoutLayer {
    TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))
}
