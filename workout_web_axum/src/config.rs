//! Central configuration for the workout_web_axum crate

use std::sync::LazyLock;

/// URL of the login page, where anonymous and expired sessions are sent
/// Default: "/login"
pub static WORKOUT_LOGIN_URL: LazyLock<String> =
    LazyLock::new(|| std::env::var("WORKOUT_LOGIN_URL").unwrap_or_else(|_| "/login".to_string()));

/// Where a successful login lands when no `redirectTo` was given
/// Default: "/workouts"
pub static WORKOUT_REDIRECT_USER: LazyLock<String> = LazyLock::new(|| {
    std::env::var("WORKOUT_REDIRECT_USER").unwrap_or_else(|_| "/workouts".to_string())
});
