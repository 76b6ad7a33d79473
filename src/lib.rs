//! Zatrust: a minimal cookie-session demo web service.
//!
//! A login form issues a session cookie for any valid username, protected
//! path prefixes are gated behind that cookie, and post-login redirects are
//! restricted to same-origin paths.

// Core
pub mod auth;
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod security;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
