//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, limits, security headers, gate)
//! - Bind server to listener (plain or TLS)
//! - Drain in-flight requests on shutdown

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::auth::SessionCookieSettings;
use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::middleware::access_control_middleware;
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::Shutdown;
use crate::net::tls::load_tls_config;
use crate::security::{headers, limits};

/// Grace period for in-flight requests on TLS shutdown.
const TLS_DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub cookie: Arc<SessionCookieSettings>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let cookie = SessionCookieSettings::new(&config.auth, &config.cookie, config.cookie_secure());
        Self {
            config: Arc::new(config),
            cookie: Arc::new(cookie),
        }
    }
}

/// HTTP server for the demo application.
pub struct HttpServer {
    router: Router,
    config: Arc<AppConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState::new(config);
        let config = state.config.clone();
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers run outermost-first in reverse order of `.layer` calls:
    /// request ID → trace → timeout → body limit → security headers → gate.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let app = Router::new()
            .route("/", get(handlers::home))
            .route("/login", get(handlers::login_page))
            .route("/dashboard", get(handlers::dashboard))
            .route("/profile", get(handlers::profile))
            .route("/api/auth/login", post(handlers::login))
            .route("/api/auth/logout", post(handlers::logout))
            .route("/healthz", get(handlers::healthz))
            .fallback(handlers::not_found)
            .layer(middleware::from_fn_with_state(state.clone(), access_control_middleware))
            .with_state(state);

        headers::apply_security_headers(app, &config.security)
            .layer(limits::body_limit_layer(config))
            .layer(limits::timeout_layer(config))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(set_request_id_layer())
    }

    /// The fully layered router (used by tests and embedders).
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the server on `listener` until `shutdown` fires.
    pub async fn run(self, listener: TcpListener, shutdown: Shutdown) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Run the server over TLS using `listener.tls` from the config.
    pub async fn run_tls(self, shutdown: Shutdown) -> Result<(), std::io::Error> {
        let tls = self.config.listener.tls.clone().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "listener.tls is not configured")
        })?;
        let addr: SocketAddr = self
            .config
            .listener
            .bind_address
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let rustls = load_tls_config(&tls).await?;
        tracing::info!(address = %addr, "HTTPS server starting");

        let handle = axum_server::Handle::new();
        let drain = handle.clone();
        let stop = shutdown.wait();
        tokio::spawn(async move {
            stop.await;
            drain.graceful_shutdown(Some(TLS_DRAIN_TIMEOUT));
        });

        axum_server::bind_rustls(addr, rustls)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }
}
