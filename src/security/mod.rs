//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → limits.rs (timeout, body size)
//!     → access gate (http::middleware)
//!     → handler
//! Outgoing response:
//!     → headers.rs (nosniff, frame denial, XSS protection)
//! ```
//!
//! # Design Decisions
//! - No trust in client input: return targets are sanitized, HTML is escaped
//! - CSRF and rate limiting are configuration-only; neither is enforced

pub mod headers;
pub mod limits;
