use serde_json::Value;
use thiserror::Error;

/// Normalized failure of a backend call
///
/// Every non-success response and every transport failure is reported with this
/// shape, so callers never deal with `reqwest` errors or raw bodies. Instances
/// are only built inside the gateway module.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{message}")]
pub struct GatewayError {
    /// HTTP status from the backend, or a synthetic 5xx for transport failures
    pub status: u16,
    /// Human readable message suitable for showing next to a form
    pub message: String,
    /// Decoded JSON body of the failed response, if it had one
    pub details: Option<Value>,
}

impl GatewayError {
    pub(crate) fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }

    /// Builds the error for a non-success response.
    ///
    /// Message priority: JSON `error`, JSON `message`, raw body text, then
    /// `"API error (<status>)"`.
    pub(crate) fn from_response(status: u16, json: Option<Value>, text: &str) -> Self {
        let from_field = |field: &str| {
            json.as_ref()
                .and_then(|v| v.get(field))
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let message = from_field("error")
            .or_else(|| from_field("message"))
            .or_else(|| {
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_string())
            })
            .unwrap_or_else(|| format!("API error ({status})"));

        Self {
            status,
            message,
            details: json,
        }
    }

    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(504, "Backend request timed out")
        } else if err.is_connect() {
            Self::new(502, "Backend is unreachable")
        } else {
            Self::new(500, format!("Backend request failed: {err}"))
        }
    }

    pub(crate) fn unexpected_response(reason: impl std::fmt::Display) -> Self {
        tracing::error!("Unexpected response from backend: {}", reason);
        Self::new(500, "Unexpected response from backend")
    }

    /// True for 401 and 403, the statuses that mean the bearer token is no longer accepted
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status, 401 | 403)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}
