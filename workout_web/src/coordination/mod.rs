//! Page flow coordination
//!
//! Each flow takes validated input plus the session token, calls the backend
//! through the gateway and reports the outcome as a `FlowError` the web layer
//! can turn into a redirect, an error page or a re-rendered form.
//!
//! - `auth`: login, registration and redirect target checks
//! - `user`: profile load and update
//! - `workout`: workout list, create, edit and delete

mod auth;
mod errors;
mod user;
mod workout;

pub use auth::{login_core, register_core, sanitize_redirect_target};
pub use errors::FlowError;
pub use user::{load_profile_core, update_profile_core};
pub use workout::{
    create_workout_core, delete_workout_core, list_workouts_core, load_workout_core,
    parse_workout_id, update_workout_core,
};
