use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html};

use workout_web::endpoints;

use super::Nav;
use crate::error::render;
use crate::session::CurrentSession;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.j2", escape = "html")]
struct IndexTemplate<'a> {
    nav: &'a Nav,
    backend_ok: bool,
    backend_status: &'a str,
}

/// Public landing page with the backend health. A failing backend never fails the page.
pub(super) async fn index(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Html<String>, (StatusCode, String)> {
    let (backend_ok, backend_status) = match endpoints::health(&state.gateway).await {
        Ok(status) => (true, status),
        Err(e) => {
            tracing::warn!("Backend health check failed ({}): {}", e.status, e);
            (false, "unavailable".to_string())
        }
    };

    let nav = Nav::from_session(&session);
    render(&IndexTemplate {
        nav: &nav,
        backend_ok,
        backend_status: &backend_status,
    })
}
