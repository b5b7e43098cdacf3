use http::HeaderMap;

use super::cookie::get_auth_token;
use super::types::{Session, SessionResolution};
use crate::gateway::{GatewayClient, endpoints};

/// Resolves the auth cookie of a request into a `Session`.
///
/// - no cookie: anonymous, and no backend call is made
/// - backend confirms the token: authenticated with the user attached
/// - backend answers 401 or 403: anonymous, and the cookie should be cleared
/// - any other failure: authenticated but unverified, so a backend outage
///   does not log everyone out
///
/// Never fails; a malformed `Cookie` header is treated as no cookie.
#[tracing::instrument(skip_all)]
pub async fn resolve_session(gateway: &GatewayClient, headers: &HeaderMap) -> SessionResolution {
    let token = match get_auth_token(headers) {
        Ok(Some(token)) => token,
        Ok(None) => return anonymous(false),
        Err(e) => {
            tracing::warn!("Ignoring unreadable auth cookie: {}", e);
            return anonymous(false);
        }
    };

    match endpoints::current_user(gateway, &token).await {
        Ok(user) => {
            tracing::debug!("Session verified for user {}", user.username);
            SessionResolution {
                session: Session::verified(token, user),
                clear_cookie: false,
            }
        }
        Err(e) if e.is_auth_failure() => {
            tracing::warn!("Backend rejected session token ({}): {}", e.status, e);
            anonymous(true)
        }
        Err(e) => {
            tracing::error!("Could not verify session token ({}): {}", e.status, e);
            SessionResolution {
                session: Session::unverified(token),
                clear_cookie: false,
            }
        }
    }
}

fn anonymous(clear_cookie: bool) -> SessionResolution {
    SessionResolution {
        session: Session::anonymous(),
        clear_cookie,
    }
}
