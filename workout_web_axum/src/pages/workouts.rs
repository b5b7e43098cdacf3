use askama::Template;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use workout_web::{
    FlowError, Workout, WorkoutForm, create_workout_core, delete_workout_core, list_workouts_core,
    parse_workout_id,
};

use super::{FormFeedback, Nav};
use crate::error::{page_load_error, respond, response_status, session_expired_response};
use crate::session::AuthSession;
use crate::state::AppState;

pub(super) const WORKOUTS_PATH: &str = "/workouts";

#[derive(Debug, Default, Deserialize)]
pub(super) struct WorkoutsQuery {
    message: Option<String>,
}

/// Text for the `message` flash set by the create, update and delete redirects
fn flash_text(message: Option<&str>) -> &'static str {
    match message {
        Some("workout_created") => "Workout created.",
        Some("workout_updated") => "Workout updated.",
        Some("workout_deleted") => "Workout deleted.",
        _ => "",
    }
}

/// `/workouts?message=<flash>`
pub(super) fn workouts_redirect(flash: &str) -> Redirect {
    Redirect::to(&format!("{WORKOUTS_PATH}?message={flash}"))
}

#[derive(Template)]
#[template(path = "workouts.j2", escape = "html")]
struct WorkoutsTemplate<'a> {
    nav: &'a Nav,
    flash: &'a str,
    workouts: &'a [Workout],
    form: &'a WorkoutForm,
    feedback: &'a FormFeedback,
}

pub(super) async fn workouts_page(
    State(state): State<AppState>,
    auth: AuthSession,
    Query(query): Query<WorkoutsQuery>,
) -> Response {
    let nav = Nav::from_session(&auth.session);
    match list_workouts_core(&state.gateway, auth.token()).await {
        Ok(workouts) => respond(
            StatusCode::OK,
            &WorkoutsTemplate {
                nav: &nav,
                flash: flash_text(query.message.as_deref()),
                workouts: &workouts,
                form: &WorkoutForm::default(),
                feedback: &FormFeedback::default(),
            },
        ),
        Err(err) => page_load_error(&nav, err, &auth.return_to),
    }
}

pub(super) async fn create_workout_action(
    State(state): State<AppState>,
    auth: AuthSession,
    Form(form): Form<WorkoutForm>,
) -> Response {
    match create_workout_core(&state.gateway, auth.token(), &form).await {
        Ok(_) => workouts_redirect("workout_created").into_response(),
        Err(FlowError::SessionExpired) => session_expired_response(&auth.return_to),
        Err(err) => {
            tracing::warn!("Creating workout failed: {}", err);
            list_with_error(&state, &auth, &form, err).await
        }
    }
}

pub(super) async fn delete_workout_action(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<String>,
) -> Response {
    let result = match parse_workout_id(&id) {
        Ok(id) => delete_workout_core(&state.gateway, auth.token(), id).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(()) => workouts_redirect("workout_deleted").into_response(),
        Err(FlowError::SessionExpired) => session_expired_response(WORKOUTS_PATH),
        Err(err) => {
            tracing::warn!("Deleting workout {} failed: {}", id, err);
            list_with_error(&state, &auth, &WorkoutForm::default(), err).await
        }
    }
}

/// Deleting only happens by POST; a stray GET just goes back to the list.
pub(super) async fn back_to_list(_auth: AuthSession) -> Redirect {
    Redirect::to(WORKOUTS_PATH)
}

/// The list page again, showing `err` above the create form.
async fn list_with_error(
    state: &AppState,
    auth: &AuthSession,
    form: &WorkoutForm,
    err: FlowError,
) -> Response {
    let workouts = match list_workouts_core(&state.gateway, auth.token()).await {
        Ok(workouts) => workouts,
        Err(e) => {
            tracing::debug!("Could not reload workouts for the error page: {}", e);
            Vec::new()
        }
    };
    let nav = Nav::from_session(&auth.session);
    respond(
        response_status(err.status()),
        &WorkoutsTemplate {
            nav: &nav,
            flash: "",
            workouts: &workouts,
            form,
            feedback: &FormFeedback::from_error(&err),
        },
    )
}
