use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect},
};

use workout_web::prepare_logout_response;

use crate::config::WORKOUT_LOGIN_URL;
use crate::error::IntoResponseError;

/// Clears the auth cookie and sends the browser to the login page.
///
/// The token is not revoked on the backend; it simply stops being sent.
pub(super) async fn logout() -> Result<impl IntoResponse, (StatusCode, String)> {
    let headers = prepare_logout_response().into_response_error()?;
    tracing::debug!("Logging out");
    Ok((
        headers,
        Redirect::to(&format!("{}?logged_out=true", WORKOUT_LOGIN_URL.as_str())),
    ))
}
