use crate::user::User;

/// Auth state of one request
///
/// Built from the auth cookie before any page logic runs and dropped with the
/// request. `authenticated` with `user: None` means the backend could not
/// confirm the token (for example it was down); calls made with the token
/// then succeed or fail on their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn verified(token: String, user: User) -> Self {
        Self {
            authenticated: true,
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn unverified(token: String) -> Self {
        Self {
            authenticated: true,
            token: Some(token),
            user: None,
        }
    }

    /// The bearer token, only when the session counts as authenticated
    pub fn bearer(&self) -> Option<&str> {
        if self.authenticated {
            self.token.as_deref()
        } else {
            None
        }
    }
}

/// Outcome of resolving the auth cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResolution {
    pub session: Session,
    /// The backend rejected the token; the response should delete the cookie
    pub clear_cookie: bool,
}
