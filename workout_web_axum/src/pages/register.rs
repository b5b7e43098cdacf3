use askama::Template;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use workout_web::{RegisterForm, register_core};

use super::{FormFeedback, Nav};
use crate::config::{WORKOUT_LOGIN_URL, WORKOUT_REDIRECT_USER};
use crate::error::{respond, response_status};
use crate::session::CurrentSession;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "register.j2", escape = "html")]
struct RegisterTemplate<'a> {
    nav: &'a Nav,
    form: &'a RegisterForm,
    feedback: &'a FormFeedback,
}

pub(super) async fn register_page(CurrentSession(session): CurrentSession) -> Response {
    if session.authenticated {
        return Redirect::to(WORKOUT_REDIRECT_USER.as_str()).into_response();
    }

    let nav = Nav::from_session(&session);
    respond(
        StatusCode::OK,
        &RegisterTemplate {
            nav: &nav,
            form: &RegisterForm::default(),
            feedback: &FormFeedback::default(),
        },
    )
}

pub(super) async fn register_action(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Form(form): Form<RegisterForm>,
) -> Response {
    match register_core(&state.gateway, &form).await {
        Ok(_) => Redirect::to(&format!("{}?registered=true", WORKOUT_LOGIN_URL.as_str()))
            .into_response(),
        Err(err) => {
            tracing::warn!("Registration of {} failed: {}", form.username.trim(), err);
            // The template never reads the password, but don't keep it around either
            let form = RegisterForm {
                password: String::new(),
                ..form
            };
            let nav = Nav::from_session(&session);
            respond(
                response_status(err.status()),
                &RegisterTemplate {
                    nav: &nav,
                    form: &form,
                    feedback: &FormFeedback::from_error(&err),
                },
            )
        }
    }
}
