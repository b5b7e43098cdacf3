use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::header::SET_COOKIE;

use workout_web::{is_auth_cookie, prepare_logout_response, resolve_session as resolve_cookie};

use super::state::AppState;

/// Resolves the auth cookie before any route handler runs.
///
/// The resulting `Session` is stored in the request extensions, where the
/// `CurrentSession` and `AuthSession` extractors pick it up. When the backend
/// rejected the token the cookie is deleted on the way out, unless the handler
/// already wrote the auth cookie itself (a fresh login, or its own deletion).
pub async fn resolve_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let resolution = resolve_cookie(&state.gateway, req.headers()).await;
    req.extensions_mut().insert(resolution.session);

    let mut response = next.run(req).await;

    if resolution.clear_cookie && !sets_auth_cookie(&response) {
        match prepare_logout_response() {
            Ok(headers) => {
                tracing::debug!("Clearing rejected auth cookie");
                for value in headers.get_all(SET_COOKIE) {
                    response.headers_mut().append(SET_COOKIE, value.clone());
                }
            }
            Err(e) => tracing::error!("Failed to build cookie deletion: {}", e),
        }
    }

    response
}

fn sets_auth_cookie(response: &Response) -> bool {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .any(is_auth_cookie)
}
