//! Server-rendered HTML views.
//!
//! Every piece of client-controlled text goes through [`escape_html`].

use crate::auth::User;
use crate::config::AppConfig;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(config: &AppConfig, title: &str, body: &str) -> String {
    let app = escape_html(&config.app.name);
    let login = escape_html(&config.auth.login_path);
    let home = escape_html(&config.auth.home_path);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width,initial-scale=1">
  <title>{title} · {app}</title>
</head>
<body>
  <header style="padding:1rem;border-bottom:1px solid #eee">
    <a href="{home}">{app}</a>
    <nav style="margin-left:1rem;display:inline-block">
      <a href="{login}" style="margin-right:1rem">Login</a>
      <a href="/dashboard">Dashboard</a>
    </nav>
  </header>
  <main style="padding:2rem">
{body}
  </main>
</body>
</html>"#,
        title = escape_html(title),
    )
}

pub fn home_page(config: &AppConfig) -> String {
    let body = format!(
        r#"    <section>
      <h1>{name}</h1>
      <p>{description}</p>
    </section>"#,
        name = escape_html(&config.app.name),
        description = escape_html(&config.app.description),
    );
    layout(config, "Home", &body)
}

/// Login form. `from` has already been reduced to a path starting with `/`.
pub fn login_page(config: &AppConfig, from: Option<&str>) -> String {
    let hidden = from
        .map(|from| {
            format!(
                r#"
        <input type="hidden" name="{param}" value="{value}">"#,
                param = escape_html(&config.auth.redirect_param),
                value = escape_html(from),
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"    <section>
      <h1>Login</h1>
      <form action="/api/auth/login" method="post" class="login-form">{hidden}
        <label for="username">
          Username
          <input id="username" name="username" placeholder="demo" required aria-describedby="username-help">
        </label>
        <div id="username-help" class="login-help">Enter any username to continue</div>
        <div class="login-actions">
          <button type="submit">Login</button>
        </div>
      </form>
    </section>"#
    );
    layout(config, "Login", &body)
}

pub fn dashboard_page(config: &AppConfig, user: &User) -> String {
    let username = escape_html(&user.username);
    let body = format!(
        r#"    <section class="dashboard-content">
      <h1>Dashboard</h1>
      <header class="dashboard-header">
        <h2>Welcome, {username}</h2>
        <p>You have successfully accessed the dashboard.</p>
      </header>
      <section class="dashboard-actions">
        <form action="/api/auth/logout" method="post">
          <button type="submit" class="logout-button">Logout</button>
        </form>
      </section>
      <details class="debug-info">
        <summary>Debug Information</summary>
        <p>User: {username}</p>
        <p>Session: Active</p>
        <p>Version: {version}</p>
      </details>
    </section>"#,
        version = escape_html(&config.app.version),
    );
    layout(config, "Dashboard", &body)
}

pub fn unauthenticated_page(config: &AppConfig) -> String {
    let body = format!(
        r#"    <section class="unauthenticated-view">
      <h1>Dashboard</h1>
      <h2>Authentication Required</h2>
      <p>You need to be logged in to access this page.</p>
      <a href="{login}">Go to Login</a>
    </section>"#,
        login = escape_html(&config.auth.login_path),
    );
    layout(config, "Dashboard", &body)
}

pub fn profile_page(config: &AppConfig, user: Option<&User>) -> String {
    let line = match user {
        Some(user) => format!("User: {}", escape_html(&user.username)),
        None => "No authenticated user detected. (Middleware should redirect before rendering.)".to_string(),
    };
    let body = format!(
        r#"    <section>
      <h1>Profile</h1>
      <p>{line}</p>
      <p>This is a demo protected profile page.</p>
    </section>"#
    );
    layout(config, "Profile", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_login_page_hidden_field() {
        let config = AppConfig::default();
        let html = login_page(&config, Some("/dashboard?tab=1&x=\"y\""));
        assert!(html.contains(r#"<input type="hidden" name="from" value="/dashboard?tab=1&amp;x=&quot;y&quot;">"#));

        let html = login_page(&config, None);
        assert!(!html.contains(r#"type="hidden""#));
    }

    #[test]
    fn test_dashboard_escapes_username() {
        let config = AppConfig::default();
        let user = User { username: "<b>bob</b>".into() };
        let html = dashboard_page(&config, &user);
        assert!(html.contains("Welcome, &lt;b&gt;bob&lt;/b&gt;"));
        assert!(!html.contains("<b>bob</b>"));
    }

    #[test]
    fn test_profile_without_user() {
        let html = profile_page(&AppConfig::default(), None);
        assert!(html.contains("No authenticated user detected"));
    }

    #[test]
    fn test_unauthenticated_links_to_login() {
        let html = unauthenticated_page(&AppConfig::default());
        assert!(html.contains("Authentication Required"));
        assert!(html.contains(r#"href="/login""#));
    }
}
