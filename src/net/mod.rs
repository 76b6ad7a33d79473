//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Plain:  TcpListener → axum::serve → router
//! TLS:    axum_server (rustls handshake) → router
//! ```
//!
//! # Design Decisions
//! - TLS is optional; plain HTTP is the default for local demos
//! - Certificate files are checked up front so startup fails with a clear message

pub mod tls;
