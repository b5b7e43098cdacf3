use chrono::{DateTime, Duration, Utc};
use http::header::{HeaderMap, SET_COOKIE};
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Cookie error: {0}")]
    Cookie(String),

    #[error("Header error: {0}")]
    Header(String),
}

/// Appends a `Set-Cookie` header carrying the auth cookie attributes.
///
/// The cookie is always `HttpOnly`, `SameSite=Strict` and scoped to `/`.
/// `Secure` is added unless `secure` is false (plain-http development).
pub(crate) fn header_set_cookie(
    headers: &mut HeaderMap,
    name: &str,
    value: &str,
    expires_at: DateTime<Utc>,
    max_age: i64,
    secure: bool,
) -> Result<(), UtilError> {
    if name.is_empty() || value.contains([';', ',', ' ', '\r', '\n']) {
        return Err(UtilError::Cookie(format!("Invalid cookie pair for {name}")));
    }

    let expires = expires_at.format("%a, %d %b %Y %H:%M:%S GMT");
    let secure_attr = if secure { " Secure;" } else { "" };
    let cookie = format!(
        "{name}={value}; SameSite=Strict;{secure_attr} HttpOnly; Path=/; Max-Age={max_age}; Expires={expires}"
    );
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| UtilError::Cookie("Failed to parse cookie".to_string()))?,
    );
    Ok(())
}

/// Appends a `Set-Cookie` header that makes the browser drop the cookie.
pub(crate) fn header_delete_cookie(
    headers: &mut HeaderMap,
    name: &str,
    secure: bool,
) -> Result<(), UtilError> {
    header_set_cookie(
        headers,
        name,
        "",
        Utc::now() - Duration::seconds(86400),
        0,
        secure,
    )
}

/// Finds the value of the cookie `name` in the request's `Cookie` headers.
pub(crate) fn get_cookie_from_headers<'a>(
    headers: &'a HeaderMap,
    name: &str,
) -> Result<Option<&'a str>, UtilError> {
    for cookie_header in headers.get_all(http::header::COOKIE) {
        let cookie_str = cookie_header.to_str().map_err(|e| {
            tracing::error!("Invalid cookie header: {}", e);
            UtilError::Header("Invalid cookie header".to_string())
        })?;

        let found = cookie_str.split(';').map(|s| s.trim()).find_map(|s| {
            let mut parts = s.splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(k), Some(v)) if k == name => Some(v),
                _ => None,
            }
        });

        if found.is_some() {
            return Ok(found);
        }
    }

    Ok(None)
}

/// Deserializes `null` as the type's default, for backend fields that may be null.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
