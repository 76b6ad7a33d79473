//! Metrics collection and exposition.
//!
//! # Metrics
//! - `auth_login_total` (counter): login attempts by `outcome` (success, invalid)
//! - `auth_logout_total` (counter): logouts
//! - `gate_decisions_total` (counter): gate outcomes by `decision` (allow, redirect)
//! - `redirect_targets_total` (counter): return targets by `outcome` (accepted, fallback)
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - The exporter is opt-in (`observability.metrics_enabled`)

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter with its own HTTP listener.
///
/// Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_login(outcome: &'static str) {
    metrics::counter!("auth_login_total", "outcome" => outcome).increment(1);
}

pub fn record_logout() {
    metrics::counter!("auth_logout_total").increment(1);
}

pub fn record_gate(decision: &'static str) {
    metrics::counter!("gate_decisions_total", "decision" => decision).increment(1);
}

pub fn record_redirect_target(accepted: bool) {
    let outcome = if accepted { "accepted" } else { "fallback" };
    metrics::counter!("redirect_targets_total", "outcome" => outcome).increment(1);
}
