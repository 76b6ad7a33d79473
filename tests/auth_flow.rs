//! End-to-end login, gating and logout.

use reqwest::StatusCode;

mod common;

use common::{header, spawn_app};

#[tokio::test]
async fn test_protected_pages_redirect_to_login() {
    let app = spawn_app().await;

    for (path, location) in [
        ("/dashboard", "/login?from=%2Fdashboard"),
        ("/profile", "/login?from=%2Fprofile"),
    ] {
        let res = app.client.get(app.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::FOUND, "path {path}");
        assert_eq!(header(&res, "location"), location);
    }
}

#[tokio::test]
async fn test_public_pages_need_no_session() {
    let app = spawn_app().await;

    for path in ["/", "/login", "/healthz"] {
        let res = app.client.get(app.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "path {path}");
    }
}

#[tokio::test]
async fn test_login_sets_cookie_and_redirects_to_return_target() {
    let app = spawn_app().await;

    let res = app
        .client
        .post(app.url("/api/auth/login"))
        .form(&[("username", "alice"), ("from", "/profile?tab=1")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(header(&res, "location"), "/profile?tab=1");

    let cookie = header(&res, "set-cookie");
    assert!(cookie.starts_with("demo_user=alice"), "cookie {cookie}");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(!cookie.contains("Secure"));
}

#[tokio::test]
async fn test_login_without_return_target_uses_default() {
    let app = spawn_app().await;

    let res = app
        .client
        .post(app.url("/api/auth/login"))
        .form(&[("username", "alice")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(header(&res, "location"), "/dashboard");
}

#[tokio::test]
async fn test_login_rejects_off_origin_return_targets() {
    let app = spawn_app().await;

    for from in [
        "https://evil.example.com//attacker",
        "//evil.example.com",
        "/redirect?to=http://evil.example.com",
        "/dash<>board",
        "dashboard",
        "",
    ] {
        let res = app
            .client
            .post(app.url("/api/auth/login"))
            .form(&[("username", "alice"), ("from", from)])
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::FOUND, "from {from:?}");
        assert_eq!(header(&res, "location"), "/dashboard", "from {from:?}");
    }
}

#[tokio::test]
async fn test_login_validation_errors() {
    let app = spawn_app().await;

    for (username, message) in [
        ("", "username is required"),
        ("   ", "username is required"),
        ("john doe", "username format is invalid"),
        ("<script>", "username format is invalid"),
    ] {
        let res = app
            .client
            .post(app.url("/api/auth/login"))
            .form(&[("username", username), ("from", "/profile")])
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "username {username:?}");
        assert!(res.headers().get("set-cookie").is_none());

        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["details"]["username"], message);
    }
}

#[tokio::test]
async fn test_login_rejects_non_form_body() {
    let app = spawn_app().await;

    let res = app
        .client
        .post(app.url("/api/auth/login"))
        .header("content-type", "application/json")
        .body(r#"{"username":"alice"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Malformed login form");
}

#[tokio::test]
async fn test_session_cookie_unlocks_protected_pages() {
    let app = spawn_app().await;

    let res = app
        .client
        .get(app.url("/dashboard"))
        .header("cookie", "demo_user=alice")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("Welcome, alice"));
    assert!(body.contains("Session: Active"));

    let res = app
        .client
        .get(app.url("/profile"))
        .header("cookie", "demo_user=alice")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("User: alice"));
}

#[tokio::test]
async fn test_empty_cookie_passes_gate_but_renders_unauthenticated_view() {
    let app = spawn_app().await;

    let res = app
        .client
        .get(app.url("/dashboard"))
        .header("cookie", "demo_user=")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("Authentication Required"));
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = spawn_app().await;

    let res = app
        .client
        .post(app.url("/api/auth/logout"))
        .header("cookie", "demo_user=alice")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(header(&res, "location"), "/");
    let cookie = header(&res, "set-cookie");
    assert!(cookie.starts_with("demo_user=;"), "cookie {cookie}");
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_login_page_keeps_only_internal_return_target() {
    let app = spawn_app().await;

    let res = app
        .client
        .get(app.url("/login?from=%2Fprofile"))
        .send()
        .await
        .unwrap();
    let body = res.text().await.unwrap();
    assert!(body.contains(r#"<input type="hidden" name="from" value="/profile">"#));

    let res = app
        .client
        .get(app.url("/login?from=https%3A%2F%2Fevil.example.com"))
        .send()
        .await
        .unwrap();
    let body = res.text().await.unwrap();
    assert!(!body.contains(r#"type="hidden""#));
}

#[tokio::test]
async fn test_full_round_trip() {
    let app = spawn_app().await;

    // Gate sends us to login with the return target.
    let res = app.client.get(app.url("/profile")).send().await.unwrap();
    let login_location = header(&res, "location");
    assert_eq!(login_location, "/login?from=%2Fprofile");

    // Login page carries it into the form.
    let page = app
        .client
        .get(app.url(&login_location))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains(r#"value="/profile""#));

    // Submitting the form lands on the original page with a session.
    let res = app
        .client
        .post(app.url("/api/auth/login"))
        .form(&[("from", "/profile"), ("username", "bob")])
        .send()
        .await
        .unwrap();
    assert_eq!(header(&res, "location"), "/profile");
    let session = header(&res, "set-cookie");
    let session = session.split(';').next().unwrap().to_string();

    let res = app
        .client
        .get(app.url("/profile"))
        .header("cookie", &session)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("User: bob"));
}
