//! Open-redirect-safe sanitization of post-login destinations.
//!
//! The value arrives from a form field or query parameter and is never trusted
//! as a URL. Only a same-origin absolute path (optionally with a query string)
//! built from a small character allow-list passes through; anything else
//! collapses to the caller's fallback.
//!
//! `%` is allowed, so an already-encoded sequence such as `%2F%2F` survives
//! sanitization untouched. Browsers do not decode it when following the
//! `Location`, but anything downstream that decodes and re-redirects would.

use crate::auth::text::trim_form_value;

/// Return `raw` as a safe same-origin path, or `fallback` if it is not one.
///
/// `None` stands for "absent or not a string". Total and pure: every input
/// yields a path, nothing is logged.
pub fn sanitize_redirect_path(raw: Option<&str>, fallback: &str) -> String {
    match raw.and_then(accept) {
        Some(path) => path.to_string(),
        None => fallback.to_string(),
    }
}

fn accept(raw: &str) -> Option<&str> {
    let value = trim_form_value(raw);

    if !value.starts_with('/') {
        return None;
    }
    // Protocol-relative: `//host/...` leaves the origin.
    if value.starts_with("//") {
        return None;
    }
    if value.contains("://") {
        return None;
    }
    if !value.chars().all(is_allowed_char) {
        return None;
    }

    Some(value).filter(|v| !v.is_empty())
}

/// Path and query characters: `[A-Za-z0-9_\-./?&=,%]`.
fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | '?' | '&' | '=' | ',' | '%')
}
