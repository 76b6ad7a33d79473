//! Route handlers: pages, login/logout, health.

use axum::{
    extract::{rejection::FormRejection, RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use url::form_urlencoded;

use crate::auth::{self, session};
use crate::http::pages;
use crate::http::response::{found, ApiError};
use crate::http::server::AppState;
use crate::observability::metrics;

/// Submitted form fields in order. The return-target field name is
/// configurable, so fields are looked up by name; the first occurrence wins.
type FormFields = Vec<(String, String)>;

fn form_field<'a>(fields: &'a FormFields, name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// `GET /`
pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(pages::home_page(&state.config))
}

/// `GET /login`: render the form, carrying the return target if it looks
/// like an internal path. The real sanitization happens on submit.
pub async fn login_page(State(state): State<AppState>, RawQuery(query): RawQuery) -> Html<String> {
    let param = state.config.auth.redirect_param.as_str();
    let from = query
        .as_deref()
        .and_then(|q| first_query_value(q, param))
        .filter(|from| from.starts_with('/'));

    Html(pages::login_page(&state.config, from.as_deref()))
}

fn first_query_value(query: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// `POST /api/auth/login`
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<FormFields>, FormRejection>,
) -> Result<Response, ApiError> {
    tracing::info!("Login attempt started");

    let Form(fields) = form.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Login failed: unreadable form");
        metrics::record_login("invalid");
        ApiError::BadRequest("Malformed login form".to_string())
    })?;

    let username = auth::validate_username(form_field(&fields, "username"), &state.config.validation.username)
        .map_err(|errors| {
            tracing::warn!(?errors, "Login failed: validation error");
            metrics::record_login("invalid");
            ApiError::Validation(errors)
        })?;

    let fallback = state.config.app.default_redirect.as_str();
    let from_raw = form_field(&fields, &state.config.auth.redirect_param);
    let destination = auth::sanitize_redirect_path(from_raw, fallback);
    metrics::record_redirect_target(from_raw.map(str::trim) == Some(destination.as_str()));

    tracing::debug!(username = %username, from = %destination, from_raw = ?from_raw, "Login data");

    let jar = jar.add(session::session_cookie(&state.cookie, &username));
    metrics::record_login("success");
    tracing::info!(username = %username, destination = %destination, "Login successful, redirecting");

    Ok((jar, found(&destination)).into_response())
}

/// `POST /api/auth/logout`
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    tracing::info!("Logout attempt started");

    let jar = jar.add(session::clear_session_cookie(&state.cookie));
    metrics::record_logout();

    tracing::info!("Logout successful, redirecting to home");
    (jar, found(&state.config.auth.home_path)).into_response()
}

/// `GET /dashboard`
pub async fn dashboard(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let user = session::current_user(&jar, &state.config.auth.session_cookie);
    tracing::debug!(user_exists = user.is_some(), username = ?user.as_ref().map(|u| &u.username), "Dashboard user check");

    match user {
        Some(user) => Html(pages::dashboard_page(&state.config, &user)),
        None => {
            tracing::warn!("Dashboard accessed without valid user session");
            Html(pages::unauthenticated_page(&state.config))
        }
    }
}

/// `GET /profile`
pub async fn profile(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let user = session::current_user(&jar, &state.config.auth.session_cookie);
    Html(pages::profile_page(&state.config, user.as_ref()))
}

/// `GET /healthz`
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_query_value_takes_first() {
        assert_eq!(
            first_query_value("from=%2Fdashboard&from=%2Fprofile", "from").as_deref(),
            Some("/dashboard")
        );
        assert_eq!(first_query_value("x=1", "from"), None);
        assert_eq!(first_query_value("from=a+b", "from").as_deref(), Some("a b"));
    }

    #[test]
    fn test_form_field_first_occurrence() {
        let fields: FormFields = vec![
            ("username".into(), "alice".into()),
            ("from".into(), "/profile".into()),
            ("from".into(), "/dashboard".into()),
        ];
        assert_eq!(form_field(&fields, "from"), Some("/profile"));
        assert_eq!(form_field(&fields, "username"), Some("alice"));
        assert_eq!(form_field(&fields, "missing"), None);
    }
}
