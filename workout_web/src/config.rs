//! Central configuration for the workout_web crate

use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum ConfigError {
    #[error("Invalid backend URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Base URL of the backend API
///
/// Endpoint paths are joined onto this URL, so it is normalized to end with `/`.
/// Default: "http://app:8080/"
pub static WORKOUT_API_URL: LazyLock<String> = LazyLock::new(|| {
    normalize_base_url(
        &std::env::var("WORKOUT_API_URL").unwrap_or_else(|_| "http://app:8080/".to_string()),
    )
});

/// Timeout in seconds applied to every backend call
/// Default: 10
pub static GATEWAY_TIMEOUT_SECS: LazyLock<u64> = LazyLock::new(|| {
    parse_timeout(std::env::var("GATEWAY_TIMEOUT_SECS").ok().as_deref())
});

fn parse_timeout(value: Option<&str>) -> u64 {
    value
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(10)
}

pub(crate) fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}
