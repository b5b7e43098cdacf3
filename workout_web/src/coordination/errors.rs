//! Error type shared by all page flows

use thiserror::Error;

use crate::gateway::GatewayError;
use crate::validation::FormErrors;

/// Why a page flow did not produce its result
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FlowError {
    /// The submitted form is invalid; no backend call was made
    #[error("Invalid input: {0}")]
    Validation(FormErrors),

    /// The backend no longer accepts the session token
    #[error("Session expired")]
    SessionExpired,

    #[error("{0}")]
    NotFound(String),

    /// Any other backend or transport failure
    #[error("{0}")]
    Gateway(GatewayError),
}

impl FlowError {
    /// HTTP status to answer with when the error is shown on a page
    pub fn status(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::SessionExpired => 401,
            Self::NotFound(_) => 404,
            Self::Gateway(e) => e.status,
        }
    }

    /// Message for the banner above a form or on the error page
    pub fn message(&self) -> String {
        match self {
            Self::Validation(errors) => errors.summary(),
            Self::SessionExpired => "Your session has expired. Please log in again.".to_string(),
            Self::NotFound(message) => message.clone(),
            Self::Gateway(e) => e.message.clone(),
        }
    }

    /// Form errors, for re-rendering a form with field messages
    pub fn form_errors(&self) -> Option<&FormErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Classifies a failure of an endpoint that needs a valid session.
    pub(crate) fn from_authenticated(err: GatewayError, not_found: &str) -> Self {
        if err.is_auth_failure() {
            tracing::warn!("Backend rejected session token ({}): {}", err.status, err);
            Self::SessionExpired
        } else if err.is_not_found() {
            tracing::debug!("Backend resource not found: {}", err);
            Self::NotFound(not_found.to_string())
        } else {
            tracing::error!("Backend call failed ({}): {}", err.status, err);
            Self::Gateway(err)
        }
    }
}

impl From<FormErrors> for FlowError {
    fn from(errors: FormErrors) -> Self {
        tracing::debug!("Form validation failed: {}", errors);
        Self::Validation(errors)
    }
}

/// Backend failures of anonymous calls (login, register) are never a session problem.
impl From<GatewayError> for FlowError {
    fn from(err: GatewayError) -> Self {
        tracing::debug!("Backend call failed ({}): {}", err.status, err);
        Self::Gateway(err)
    }
}
