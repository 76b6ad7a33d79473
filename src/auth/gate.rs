//! Session gate for protected paths.
//!
//! # Responsibilities
//! - Decide whether a request path needs a session
//! - Produce the login redirect (with the original path as return target)
//!
//! # Design Decisions
//! - Plain `starts_with` prefix matching, case-sensitive, no normalization
//! - First match wins over the ordered prefix list; configured prefixes are
//!   assumed not to overlap, so order never changes the outcome
//! - The return target is the path only; the query string is dropped

use url::form_urlencoded;

use crate::config::AuthConfig;

/// Outcome of the gate for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Let the request through unmodified.
    Allow,
    /// Send the client to the login page, remembering where it was going.
    RedirectToLogin {
        login_path: String,
        /// Original request path, unencoded.
        return_to: String,
    },
}

impl GateDecision {
    pub fn is_allow(&self) -> bool {
        matches!(self, GateDecision::Allow)
    }

    /// `Location` value for a redirect decision, with `return_to` URL-encoded
    /// under `redirect_param`.
    pub fn location(&self, redirect_param: &str) -> Option<String> {
        match self {
            GateDecision::Allow => None,
            GateDecision::RedirectToLogin { login_path, return_to } => {
                Some(login_location(login_path, redirect_param, return_to))
            }
        }
    }
}

/// First protected prefix covering `path`, if any.
pub fn matching_prefix<'a>(path: &str, prefixes: &'a [String]) -> Option<&'a str> {
    prefixes
        .iter()
        .map(String::as_str)
        .find(|prefix| path.starts_with(prefix))
}

/// Decide whether `path` may proceed given the session state.
pub fn decide(path: &str, has_session: bool, auth: &AuthConfig) -> GateDecision {
    if matching_prefix(path, &auth.protected_prefixes).is_none() || has_session {
        return GateDecision::Allow;
    }

    GateDecision::RedirectToLogin {
        login_path: auth.login_path.clone(),
        return_to: path.to_string(),
    }
}

/// Build `login_path?param=<encoded return_to>`.
pub fn login_location(login_path: &str, redirect_param: &str, return_to: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(redirect_param, return_to)
        .finish();
    format!("{login_path}?{query}")
}
