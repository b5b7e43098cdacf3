use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::null_as_default;

/// A user as the backend returns it
///
/// Only the fields the pages show are kept; anything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio: String,
}

/// Body of `POST tokens/authentication`
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST users`
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub bio: String,
}

/// Body of `PUT users/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub bio: String,
}

/// Bearer token issued by the backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthToken {
    pub token: String,
    #[serde(default)]
    pub expiry: Option<DateTime<Utc>>,
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub auth_token: AuthToken,
    /// Present when the backend includes the user next to the token
    pub user: Option<User>,
}
