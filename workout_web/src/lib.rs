//! workout_web - core of the workout log web front-end
//!
//! This crate resolves the auth cookie into a session, talks to the backend
//! API through a single gateway client, validates form input and coordinates
//! the page flows. It knows nothing about a particular web framework; the
//! `workout_web_axum` crate wires it into axum.

mod config;
mod coordination;
mod gateway;
mod session;
mod user;
mod utils;
mod validation;
mod workout;

#[cfg(test)]
mod test_utils;

pub use config::{ConfigError, GATEWAY_TIMEOUT_SECS, WORKOUT_API_URL};

pub use coordination::{
    FlowError, create_workout_core, delete_workout_core, list_workouts_core, load_profile_core,
    load_workout_core, login_core, parse_workout_id, register_core, sanitize_redirect_target,
    update_profile_core, update_workout_core,
};

pub use gateway::{GatewayClient, GatewayError, GatewayResponse, decode_envelope, endpoints};

pub use session::{
    AUTH_COOKIE_MAX_AGE, AUTH_COOKIE_NAME, AUTH_COOKIE_SECURE, Session, SessionError,
    SessionResolution, get_auth_token, is_auth_cookie, prepare_login_response,
    prepare_logout_response, resolve_session,
};

pub use user::{
    AuthToken, Credentials, LoginForm, LoginOutcome, NewUser, ProfileForm, ProfileUpdate,
    RegisterForm, User,
};

pub use validation::{FieldError, FormErrors};

pub use workout::{Workout, WorkoutDraft, WorkoutEntry, WorkoutForm};
