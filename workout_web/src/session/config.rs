use std::sync::LazyLock;

const ONE_DAY: i64 = 86400;
const SEVEN_DAYS: i64 = 7 * ONE_DAY;

/// Name of the cookie holding the bearer token
/// Default: "auth_token"
pub static AUTH_COOKIE_NAME: LazyLock<String> =
    LazyLock::new(|| parse_cookie_name(std::env::var("AUTH_COOKIE_NAME").ok().as_deref()));

/// Lifetime of the auth cookie in seconds, kept between one and seven days
/// Default: 86400, the backend's token lifetime
pub static AUTH_COOKIE_MAX_AGE: LazyLock<i64> = LazyLock::new(|| {
    parse_max_age(std::env::var("AUTH_COOKIE_MAX_AGE").ok().as_deref())
});

/// Whether the auth cookie carries `Secure`; only `false` turns it off
pub static AUTH_COOKIE_SECURE: LazyLock<bool> = LazyLock::new(|| {
    parse_secure(std::env::var("AUTH_COOKIE_SECURE").ok().as_deref())
});

fn parse_cookie_name(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("auth_token")
        .to_string()
}

fn parse_max_age(value: Option<&str>) -> i64 {
    value
        .and_then(|s| s.trim().parse::<i64>().ok())
        .map(|secs| secs.clamp(ONE_DAY, SEVEN_DAYS))
        .unwrap_or(ONE_DAY)
}

fn parse_secure(value: Option<&str>) -> bool {
    !matches!(value.map(|s| s.trim().to_ascii_lowercase()).as_deref(), Some("false"))
}
