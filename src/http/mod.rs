//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, tracing span)
//!     → middleware/access_control.rs (session gate)
//!     → handlers.rs (pages, login, logout)
//!     → pages.rs (HTML) / response.rs (redirects, JSON errors)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::ApiError;
pub use server::{AppState, HttpServer};
