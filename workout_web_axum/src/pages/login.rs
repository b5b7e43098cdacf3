use askama::Template;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use workout_web::{LoginForm, login_core, prepare_login_response, sanitize_redirect_target};

use super::{FormFeedback, Nav};
use crate::config::{WORKOUT_LOGIN_URL, WORKOUT_REDIRECT_USER};
use crate::error::{IntoResponseError, respond, response_status};
use crate::session::CurrentSession;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub(super) struct LoginQuery {
    #[serde(rename = "redirectTo")]
    redirect_to: Option<String>,
    registered: Option<String>,
    logged_out: Option<String>,
    reason: Option<String>,
}

impl LoginQuery {
    /// Where to go after logging in; only local paths are honored
    fn target(&self) -> String {
        sanitize_redirect_target(self.redirect_to.as_deref(), WORKOUT_REDIRECT_USER.as_str())
    }

    /// The form posts back to the login URL, keeping `redirectTo`
    fn form_action(&self) -> String {
        match &self.redirect_to {
            Some(_) => format!(
                "{}?redirectTo={}",
                WORKOUT_LOGIN_URL.as_str(),
                urlencoding::encode(&self.target())
            ),
            None => WORKOUT_LOGIN_URL.to_string(),
        }
    }

    fn banner(&self) -> &'static str {
        if self.reason.as_deref() == Some("session_expired") {
            "Your session has expired. Please log in again."
        } else if self.registered.as_deref() == Some("true") {
            "Registration successful. Please log in."
        } else if self.logged_out.as_deref() == Some("true") {
            "You have been logged out."
        } else {
            ""
        }
    }
}

#[derive(Template)]
#[template(path = "login.j2", escape = "html")]
struct LoginTemplate<'a> {
    nav: &'a Nav,
    banner: &'a str,
    form_action: &'a str,
    username: &'a str,
    feedback: &'a FormFeedback,
}

pub(super) async fn login_page(
    CurrentSession(session): CurrentSession,
    Query(query): Query<LoginQuery>,
) -> Response {
    if session.authenticated {
        let target = query.target();
        tracing::debug!("Already logged in, redirecting to {}", target);
        return Redirect::to(&target).into_response();
    }

    let nav = Nav::from_session(&session);
    respond(
        StatusCode::OK,
        &LoginTemplate {
            nav: &nav,
            banner: query.banner(),
            form_action: &query.form_action(),
            username: "",
            feedback: &FormFeedback::default(),
        },
    )
}

/// Exchanges the credentials for a token, stores it in the auth cookie and
/// redirects. On failure the form comes back with the backend's message and
/// status; the password is never sent back.
pub(super) async fn login_action(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Query(query): Query<LoginQuery>,
    Form(form): Form<LoginForm>,
) -> Result<Response, (StatusCode, String)> {
    match login_core(&state.gateway, &form).await {
        Ok(outcome) => {
            let headers = prepare_login_response(&outcome.auth_token).into_response_error()?;
            let target = query.target();
            tracing::debug!("Login succeeded, redirecting to {}", target);
            Ok((headers, Redirect::to(&target)).into_response())
        }
        Err(err) => {
            tracing::warn!("Login failed for {}: {}", form.username.trim(), err);
            let nav = Nav::from_session(&session);
            Ok(respond(
                response_status(err.status()),
                &LoginTemplate {
                    nav: &nav,
                    banner: "",
                    form_action: &query.form_action(),
                    username: &form.username,
                    feedback: &FormFeedback::from_error(&err),
                },
            ))
        }
    }
}
