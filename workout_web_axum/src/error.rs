use askama::Template;
use axum::response::{Html, IntoResponse, Redirect, Response};
use http::{Result as HttpResponse, StatusCode};

use workout_web::{FlowError, SessionError, prepare_logout_response};

use super::pages::Nav;
use super::session::session_expired_redirect_url;

/// Helper trait for converting errors to a standard response error format
pub(super) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

impl<T> IntoResponseError<T> for Result<T, FlowError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| (response_status(e.status()), e.message()))
    }
}

impl<T> IntoResponseError<T> for Result<T, SessionError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            tracing::error!("Session error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })
    }
}

impl<T> IntoResponseError<T> for askama::Result<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            tracing::error!("Template rendering failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })
    }
}

/// Implementation for http::Error (used by Response::builder())
impl<T> IntoResponseError<T> for HttpResponse<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
    }
}

/// Status for a page showing a failure; anything that is not an error status becomes 502.
pub(crate) fn response_status(status: u16) -> StatusCode {
    match StatusCode::from_u16(status) {
        Ok(code) if code.is_client_error() || code.is_server_error() => code,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// Renders a template, mapping failures to a plain 500.
pub(crate) fn render<T: Template>(template: &T) -> Result<Html<String>, (StatusCode, String)> {
    Ok(Html(template.render().into_response_error()?))
}

/// Renders a template as a full response with `status`.
pub(crate) fn respond<T: Template>(status: StatusCode, template: &T) -> Response {
    match render(template) {
        Ok(html) => (status, html).into_response(),
        Err(e) => e.into_response(),
    }
}

#[derive(Template)]
#[template(path = "error.j2", escape = "html")]
struct ErrorTemplate<'a> {
    nav: &'a Nav,
    status: u16,
    message: &'a str,
}

/// Full error page with the given status.
pub(crate) fn error_page(nav: &Nav, status: StatusCode, message: &str) -> Response {
    let template = ErrorTemplate {
        nav,
        status: status.as_u16(),
        message,
    };
    respond(status, &template)
}

/// Clears the auth cookie and sends the browser to the login page.
pub(crate) fn session_expired_response(return_to: &str) -> Response {
    let location = session_expired_redirect_url(return_to);
    tracing::info!("Session expired, redirecting to {}", location);
    match prepare_logout_response().into_response_error() {
        Ok(headers) => (headers, Redirect::to(&location)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Outcome of a failed page load: the login redirect for expired sessions,
/// the error page for everything else.
pub(crate) fn page_load_error(nav: &Nav, err: FlowError, return_to: &str) -> Response {
    match err {
        FlowError::SessionExpired => session_expired_response(return_to),
        other => error_page(nav, response_status(other.status()), &other.message()),
    }
}
