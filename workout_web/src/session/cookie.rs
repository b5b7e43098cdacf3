use chrono::{DateTime, Duration, Utc};
use http::HeaderMap;
use http::header::HeaderValue;

use super::config::{AUTH_COOKIE_MAX_AGE, AUTH_COOKIE_NAME, AUTH_COOKIE_SECURE};
use super::errors::SessionError;
use crate::user::AuthToken;
use crate::utils::{get_cookie_from_headers, header_delete_cookie, header_set_cookie};

/// Reads the bearer token from the auth cookie. An empty cookie counts as absent.
pub fn get_auth_token(headers: &HeaderMap) -> Result<Option<String>, SessionError> {
    let token = get_cookie_from_headers(headers, AUTH_COOKIE_NAME.as_str())?;
    Ok(token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string))
}

/// Headers that store a freshly issued token in the auth cookie.
pub fn prepare_login_response(auth_token: &AuthToken) -> Result<HeaderMap, SessionError> {
    if auth_token.token.is_empty() {
        return Err(SessionError::Cookie("Refusing to store an empty token".to_string()));
    }

    let now = Utc::now();
    let max_age = cookie_lifetime(auth_token.expiry, now, *AUTH_COOKIE_MAX_AGE);

    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        AUTH_COOKIE_NAME.as_str(),
        &auth_token.token,
        now + Duration::seconds(max_age),
        max_age,
        *AUTH_COOKIE_SECURE,
    )?;
    Ok(headers)
}

/// Headers that delete the auth cookie.
pub fn prepare_logout_response() -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_delete_cookie(&mut headers, AUTH_COOKIE_NAME.as_str(), *AUTH_COOKIE_SECURE)?;
    Ok(headers)
}

/// True when a `Set-Cookie` value writes or deletes the auth cookie.
pub fn is_auth_cookie(set_cookie: &HeaderValue) -> bool {
    set_cookie
        .to_str()
        .ok()
        .and_then(|v| v.split_once('='))
        .is_some_and(|(name, _)| name.trim() == AUTH_COOKIE_NAME.as_str())
}

/// Cookie lifetime in seconds: `max_age`, shortened to the token expiry when that comes first.
fn cookie_lifetime(expiry: Option<DateTime<Utc>>, now: DateTime<Utc>, max_age: i64) -> i64 {
    match expiry {
        Some(expiry) if expiry > now => (expiry - now).num_seconds().clamp(1, max_age),
        _ => max_age,
    }
}
