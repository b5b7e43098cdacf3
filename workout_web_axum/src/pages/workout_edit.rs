use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use workout_web::{
    FlowError, WorkoutForm, load_workout_core, parse_workout_id, update_workout_core,
};

use super::workouts::workouts_redirect;
use super::{FormFeedback, Nav};
use crate::error::{page_load_error, respond, response_status, session_expired_response};
use crate::session::AuthSession;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "workout_edit.j2", escape = "html")]
struct EditTemplate<'a> {
    nav: &'a Nav,
    workout_id: i64,
    form: &'a WorkoutForm,
    feedback: &'a FormFeedback,
}

pub(super) async fn edit_page(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<String>,
) -> Response {
    let nav = Nav::from_session(&auth.session);
    let id = match parse_workout_id(&id) {
        Ok(id) => id,
        Err(err) => return page_load_error(&nav, err, &auth.return_to),
    };

    match load_workout_core(&state.gateway, auth.token(), id).await {
        Ok(workout) => respond(
            StatusCode::OK,
            &EditTemplate {
                nav: &nav,
                workout_id: workout.id,
                form: &WorkoutForm::from_workout(&workout),
                feedback: &FormFeedback::default(),
            },
        ),
        Err(err) => page_load_error(&nav, err, &auth.return_to),
    }
}

pub(super) async fn edit_action(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<String>,
    Form(form): Form<WorkoutForm>,
) -> Response {
    let nav = Nav::from_session(&auth.session);
    let id = match parse_workout_id(&id) {
        Ok(id) => id,
        Err(err) => return page_load_error(&nav, err, &auth.return_to),
    };

    match update_workout_core(&state.gateway, auth.token(), id, &form).await {
        Ok(_) => workouts_redirect("workout_updated").into_response(),
        Err(FlowError::SessionExpired) => session_expired_response(&auth.return_to),
        Err(err) => {
            tracing::warn!("Updating workout {} failed: {}", id, err);
            respond(
                response_status(err.status()),
                &EditTemplate {
                    nav: &nav,
                    workout_id: id,
                    form: &form,
                    feedback: &FormFeedback::from_error(&err),
                },
            )
        }
    }
}
