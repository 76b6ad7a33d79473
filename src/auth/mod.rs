//! Authentication subsystem.
//!
//! # Data Flow
//! ```text
//! Request to protected path:
//!     → session.rs (is the session cookie present?)
//!     → gate.rs (Allow | RedirectToLogin with return target)
//!
//! Login form submission:
//!     → validation.rs (username rules)
//!     → redirect.rs (sanitize the return target)
//!     → session.rs (issue cookie)
//! ```
//!
//! # Design Decisions
//! - Gate and sanitizer are pure functions over explicit config
//! - Form input is trimmed like a browser would (`text.rs`), not with `str::trim`
//! - Malformed return targets degrade to the fallback path, never to an error
//! - No passwords, no server-side session store

pub mod gate;
pub mod redirect;
pub mod session;
pub mod text;
pub mod validation;

pub use gate::{decide, GateDecision};
pub use redirect::sanitize_redirect_path;
pub use session::{current_user, has_session, SessionCookieSettings, User};
pub use validation::{validate_username, FieldErrors};
