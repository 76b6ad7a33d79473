//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Application identity and post-login default.
    pub app: AppInfoConfig,

    /// Deployment environment (drives cookie `Secure` and log defaults).
    pub environment: Environment,

    /// Listener configuration (bind address, TLS).
    pub listener: ListenerConfig,

    /// Session gating and login flow paths.
    pub auth: AuthConfig,

    /// Session cookie attributes.
    pub cookie: CookieConfig,

    /// Security hardening settings.
    pub security: SecurityConfig,

    /// Form validation rules.
    pub validation: ValidationRules,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Whether the session cookie should carry the `Secure` attribute.
    ///
    /// An explicit `cookie.secure` wins; otherwise only production sets it.
    pub fn cookie_secure(&self) -> bool {
        self.cookie
            .secure
            .unwrap_or(self.environment == Environment::Production)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            "test" => Ok(Environment::Test),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

/// Application identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppInfoConfig {
    pub name: String,
    pub description: String,

    /// Destination after login when no (valid) return target was supplied.
    pub default_redirect: String,

    pub version: String,
}

impl Default for AppInfoConfig {
    fn default() -> Self {
        Self {
            name: "Zatrust Quickstart".to_string(),
            description: "A minimal, modular cookie-session starter".to_string(),
            default_redirect: "/dashboard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,

    /// Optional TLS configuration.
    pub tls: Option<TlsConfig>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            tls: None,
        }
    }
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: String,

    /// Path to private key file (PEM).
    pub key_path: String,
}

/// Session gating configuration.
///
/// Passed explicitly to the access gate and the auth handlers; nothing reads
/// these values from global state.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Name of the cookie carrying the session token.
    pub session_cookie: String,

    /// Query/form parameter carrying the post-login return target.
    pub redirect_param: String,

    /// Ordered path prefixes that require a session. First match wins.
    pub protected_prefixes: Vec<String>,

    pub login_path: String,
    pub home_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie: "demo_user".to_string(),
            redirect_param: "from".to_string(),
            protected_prefixes: vec!["/dashboard".to_string(), "/profile".to_string()],
            login_path: "/login".to_string(),
            home_path: "/".to_string(),
        }
    }
}

/// Session cookie attributes.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CookieConfig {
    pub http_only: bool,
    pub path: String,
    pub same_site: SameSitePolicy,

    /// `None` derives the flag from the environment (set in production).
    pub secure: Option<bool>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            http_only: true,
            path: "/".to_string(),
            same_site: SameSitePolicy::Lax,
            secure: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SameSitePolicy {
    Strict,
    #[default]
    Lax,
    None,
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Attach `response_headers` to every response.
    pub enable_headers: bool,

    /// Static response headers (name → value).
    pub response_headers: BTreeMap<String, String>,

    /// Maximum body size in bytes.
    pub max_body_size: usize,

    /// Declared for parity with deployment manifests; not enforced.
    pub csrf_protection: bool,

    /// Declared for parity with deployment manifests; not enforced.
    pub rate_limiting: RateLimitConfig,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        let response_headers = [
            ("X-Content-Type-Options", "nosniff"),
            ("X-Frame-Options", "DENY"),
            ("X-XSS-Protection", "1; mode=block"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            enable_headers: true,
            response_headers,
            max_body_size: 1024 * 1024, // 1MB
            csrf_protection: false,
            rate_limiting: RateLimitConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub window_secs: u64,
    pub max_requests: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: 15 * 60,
            max_requests: 100,
        }
    }
}

/// Form validation rules.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ValidationRules {
    pub username: UsernameRules,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UsernameRules {
    /// Minimum length in characters.
    pub min_length: usize,

    /// Maximum length in characters.
    pub max_length: usize,
}

impl Default for UsernameRules {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 50,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `None` picks per environment.
    pub log_level: Option<String>,

    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
