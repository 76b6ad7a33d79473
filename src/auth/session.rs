//! Session cookie handling.
//!
//! The session token is the raw username stored in a single cookie. There is
//! no signature and no server-side store: the gate only asks whether the
//! cookie exists, pages additionally require a non-empty value.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use time::Duration;

use crate::config::{AuthConfig, CookieConfig, SameSitePolicy};

/// User derived from the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: String,
}

/// Attributes shared by the set and clear cookies.
#[derive(Debug, Clone)]
pub struct SessionCookieSettings {
    pub name: String,
    pub path: String,
    pub http_only: bool,
    pub same_site: SameSitePolicy,
    pub secure: bool,
}

impl SessionCookieSettings {
    pub fn new(auth: &AuthConfig, cookie: &CookieConfig, secure: bool) -> Self {
        Self {
            name: auth.session_cookie.clone(),
            path: cookie.path.clone(),
            http_only: cookie.http_only,
            same_site: cookie.same_site,
            secure,
        }
    }

    fn build(&self, value: String) -> Cookie<'static> {
        Cookie::build((self.name.clone(), value))
            .path(self.path.clone())
            .http_only(self.http_only)
            .same_site(same_site(self.same_site))
            .secure(self.secure)
            .build()
    }
}

fn same_site(policy: SameSitePolicy) -> SameSite {
    match policy {
        SameSitePolicy::Strict => SameSite::Strict,
        SameSitePolicy::Lax => SameSite::Lax,
        SameSitePolicy::None => SameSite::None,
    }
}

/// Cookie establishing a session for `username`.
pub fn session_cookie(settings: &SessionCookieSettings, username: &str) -> Cookie<'static> {
    settings.build(username.to_string())
}

/// Cookie that overwrites and expires the session cookie.
pub fn clear_session_cookie(settings: &SessionCookieSettings) -> Cookie<'static> {
    let mut cookie = settings.build(String::new());
    cookie.set_max_age(Duration::ZERO);
    cookie
}

/// Whether the request carries the session cookie at all.
pub fn has_session(jar: &CookieJar, cookie_name: &str) -> bool {
    jar.get(cookie_name).is_some()
}

/// User behind the session cookie; an empty value counts as no session.
pub fn current_user(jar: &CookieJar, cookie_name: &str) -> Option<User> {
    jar.get(cookie_name)
        .map(Cookie::value)
        .filter(|value| !value.is_empty())
        .map(|value| User {
            username: value.to_string(),
        })
}
