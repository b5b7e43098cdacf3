mod index;
mod login;
mod logout;
mod profile;
mod register;
mod router;
mod workout_edit;
mod workouts;

pub(crate) use router::{router, session_free_router};

use workout_web::{FlowError, FormErrors, Session};

/// What the navigation bar needs to know about the visitor
#[derive(Clone, Debug, Default)]
pub(crate) struct Nav {
    pub(crate) authenticated: bool,
    pub(crate) username: String,
}

impl Nav {
    pub(crate) fn from_session(session: &Session) -> Self {
        Self {
            authenticated: session.authenticated,
            username: session
                .user
                .as_ref()
                .map(|u| u.username.clone())
                .unwrap_or_default(),
        }
    }
}

/// Messages shown with a form after a failed submission
#[derive(Clone, Debug, Default)]
pub(crate) struct FormFeedback {
    /// Banner above the form
    pub(crate) form_error: String,
    errors: FormErrors,
}

impl FormFeedback {
    pub(crate) fn from_error(err: &FlowError) -> Self {
        match err.form_errors() {
            Some(errors) => Self {
                form_error: "Please correct the errors below.".to_string(),
                errors: errors.clone(),
            },
            None => Self {
                form_error: err.message(),
                errors: FormErrors::new(),
            },
        }
    }

    /// All messages for `field`, joined; empty when the field is fine
    pub(crate) fn field(&self, field: &str) -> String {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
