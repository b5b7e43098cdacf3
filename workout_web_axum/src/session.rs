use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, OriginalUri},
    response::{IntoResponse, Redirect, Response},
};
use http::request::Parts;

use workout_web::{Session, User};

use super::config::WORKOUT_LOGIN_URL;

/// Redirect to the login page for requests that need a session but have none
pub struct AuthRedirect {
    return_to: String,
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        let location = login_redirect_url(&self.return_to);
        tracing::debug!("Redirecting anonymous request to {}", location);
        Redirect::to(&location).into_response()
    }
}

/// The session resolved for this request, authenticated or not
///
/// Requires the `resolve_session` middleware; without it every request looks anonymous.
#[derive(Clone, Debug)]
pub struct CurrentSession(pub Session);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let session = parts.extensions.get::<Session>().cloned().unwrap_or_else(|| {
            tracing::warn!("No session in request extensions; is the middleware installed?");
            Session::anonymous()
        });
        Ok(Self(session))
    }
}

/// An authenticated session, available as an Axum extractor
///
/// Gated handlers take this extractor. Requests without an authenticated
/// session never reach the handler; they get a 303 to the login page with
/// `redirectTo` set to the requested path and query.
#[derive(Clone, Debug)]
pub struct AuthSession {
    pub session: Session,
    /// Path and query of the current request, for sending the user back after login
    pub return_to: String,
    token: String,
}

impl AuthSession {
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The user, when the backend confirmed the token for this request
    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }
}

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let return_to = request_path_and_query(parts);
        let Ok(CurrentSession(session)) = CurrentSession::from_request_parts(parts, state).await;

        match session.bearer().map(str::to_string) {
            Some(token) => Ok(Self {
                session,
                return_to,
                token,
            }),
            None => {
                tracing::debug!("Anonymous request to gated page {}", return_to);
                Err(AuthRedirect { return_to })
            }
        }
    }
}

fn request_path_and_query(parts: &Parts) -> String {
    let uri = parts
        .extensions
        .get::<OriginalUri>()
        .map(|original| &original.0)
        .unwrap_or(&parts.uri);
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

/// `/login?redirectTo=<path>`
pub(crate) fn login_redirect_url(return_to: &str) -> String {
    format!(
        "{}?redirectTo={}",
        WORKOUT_LOGIN_URL.as_str(),
        urlencoding::encode(return_to)
    )
}

/// `/login?reason=session_expired&redirectTo=<path>`
pub(crate) fn session_expired_redirect_url(return_to: &str) -> String {
    format!(
        "{}?reason=session_expired&redirectTo={}",
        WORKOUT_LOGIN_URL.as_str(),
        urlencoding::encode(return_to)
    )
}
