use axum::{
    Router,
    routing::{get, post},
};

use super::{index, login, logout, profile, register, workout_edit, workouts};
use crate::state::AppState;

/// Pages that see the resolved session
pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .route("/login", get(login::login_page).post(login::login_action))
        .route(
            "/register",
            get(register::register_page).post(register::register_action),
        )
        .route(
            "/profile",
            get(profile::profile_page).post(profile::profile_action),
        )
        .route(
            "/workouts",
            get(workouts::workouts_page).post(workouts::create_workout_action),
        )
        .route(
            "/workouts/{id}/delete",
            post(workouts::delete_workout_action).get(workouts::back_to_list),
        )
        .route(
            "/workouts/{id}/edit",
            get(workout_edit::edit_page).post(workout_edit::edit_action),
        )
}

/// Pages that never look at the session, so no verification call is made for them
pub(crate) fn session_free_router() -> Router<AppState> {
    Router::new().route("/logout", get(logout::logout).post(logout::logout))
}
