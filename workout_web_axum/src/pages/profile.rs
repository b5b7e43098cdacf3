use askama::Template;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::Response,
};

use workout_web::{FlowError, ProfileForm, Session, User, load_profile_core, update_profile_core};

use super::{FormFeedback, Nav};
use crate::error::{page_load_error, respond, response_status, session_expired_response};
use crate::session::AuthSession;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "profile.j2", escape = "html")]
struct ProfileTemplate<'a> {
    nav: &'a Nav,
    email: &'a str,
    form: &'a ProfileForm,
    message: &'a str,
    feedback: &'a FormFeedback,
}

fn profile_form(user: &User) -> ProfileForm {
    ProfileForm {
        username: user.username.clone(),
        bio: user.bio.clone(),
    }
}

pub(super) async fn profile_page(State(state): State<AppState>, auth: AuthSession) -> Response {
    let nav = Nav::from_session(&auth.session);
    match load_profile_core(&state.gateway, &auth.session).await {
        Ok(user) => {
            let nav = Nav::from_session(&Session::verified(auth.token().to_string(), user.clone()));
            respond(
                StatusCode::OK,
                &ProfileTemplate {
                    nav: &nav,
                    email: &user.email,
                    form: &profile_form(&user),
                    message: "",
                    feedback: &FormFeedback::default(),
                },
            )
        }
        Err(err) => page_load_error(&nav, err, &auth.return_to),
    }
}

pub(super) async fn profile_action(
    State(state): State<AppState>,
    auth: AuthSession,
    Form(form): Form<ProfileForm>,
) -> Response {
    match update_profile_core(&state.gateway, auth.token(), &form).await {
        Ok(user) => {
            let nav = Nav::from_session(&Session::verified(auth.token().to_string(), user.clone()));
            respond(
                StatusCode::OK,
                &ProfileTemplate {
                    nav: &nav,
                    email: &user.email,
                    form: &profile_form(&user),
                    message: "Profile updated.",
                    feedback: &FormFeedback::default(),
                },
            )
        }
        Err(FlowError::SessionExpired) => session_expired_response(&auth.return_to),
        Err(err) => {
            tracing::warn!("Profile update failed: {}", err);
            let nav = Nav::from_session(&auth.session);
            respond(
                response_status(err.status()),
                &ProfileTemplate {
                    nav: &nav,
                    email: auth.user().map(|u| u.email.as_str()).unwrap_or_default(),
                    form: &form,
                    message: "",
                    feedback: &FormFeedback::from_error(&err),
                },
            )
        }
    }
}
