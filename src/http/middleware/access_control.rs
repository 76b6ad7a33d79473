//! Access Control Middleware.
//! Enforces the session requirement on protected path prefixes.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::{gate, session};
use crate::http::response::found;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Runs the gate before any handler. Denied requests get a 302 to the login
/// page with the original path as return target; allowed ones pass untouched.
pub async fn access_control_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    req: Request<Body>,
    next: Next,
) -> Response {
    let auth = &state.config.auth;
    let has_session = session::has_session(&jar, &auth.session_cookie);
    let decision = gate::decide(req.uri().path(), has_session, auth);

    match decision.location(&auth.redirect_param) {
        None => {
            metrics::record_gate("allow");
            next.run(req).await
        }
        Some(location) => {
            tracing::warn!(path = %req.uri().path(), location = %location, "Unauthenticated access to protected path");
            metrics::record_gate("redirect");
            found(&location)
        }
    }
}
