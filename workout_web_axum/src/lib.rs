//! workout_web_axum - axum pages for the workout log front-end
//!
//! Serves the login, registration, profile and workout pages on top of the
//! `workout_web` core. Mount `workout_web_router()` with an `AppState` and the
//! whole site is available.

mod config;
mod error;
mod middleware;
mod pages;
mod router;
mod session;
mod state;

pub use config::{WORKOUT_LOGIN_URL, WORKOUT_REDIRECT_USER};
pub use middleware::resolve_session;
pub use router::{workout_web_router, workout_web_router_no_trace};
pub use session::{AuthRedirect, AuthSession, CurrentSession};
pub use state::AppState;

// Re-export what callers need to build the state without depending on the core crate
pub use workout_web::{ConfigError, GatewayClient};
