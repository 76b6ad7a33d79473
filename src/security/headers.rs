//! Security response headers.
//!
//! # Responsibilities
//! - Attach the configured static headers (nosniff, frame denial, ...) to
//!   every response, redirects and errors included
//!
//! # Design Decisions
//! - Handlers may override a header; the layer only fills in missing ones
//! - Names/values are checked during config validation; anything unparsable
//!   that slips through is skipped with a warning

use axum::{
    http::{HeaderName, HeaderValue},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::schema::SecurityConfig;

/// Parse one configured header pair.
pub fn parse_header(name: &str, value: &str) -> Option<(HeaderName, HeaderValue)> {
    let name = HeaderName::try_from(name).ok()?;
    let value = HeaderValue::try_from(value).ok()?;
    Some((name, value))
}

/// Headers to attach, in configuration order. Empty when disabled.
pub fn security_headers(config: &SecurityConfig) -> Vec<(HeaderName, HeaderValue)> {
    if !config.enable_headers {
        return Vec::new();
    }

    config
        .response_headers
        .iter()
        .filter_map(|(name, value)| {
            let parsed = parse_header(name, value);
            if parsed.is_none() {
                tracing::warn!(header = %name, "Skipping unparsable security header");
            }
            parsed
        })
        .collect()
}

/// Wrap `router` with one `SetResponseHeaderLayer` per header.
pub fn apply_security_headers<S>(router: Router<S>, config: &SecurityConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    security_headers(config)
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(name, value))
        })
}
