//! Typed wrappers for the backend endpoints the pages use

use http::Method;
use serde_json::Value;

use super::client::GatewayClient;
use super::errors::GatewayError;
use super::types::decode_envelope;
use crate::user::{AuthToken, Credentials, LoginOutcome, NewUser, ProfileUpdate, User};
use crate::workout::{Workout, WorkoutDraft};

/// `POST tokens/authentication`
pub async fn authenticate(
    gateway: &GatewayClient,
    credentials: &Credentials,
) -> Result<LoginOutcome, GatewayError> {
    let res = gateway
        .call(Method::POST, "tokens/authentication", Some(credentials), None)
        .await?;

    let auth_token: AuthToken = res.decode("auth_token")?;
    if auth_token.token.is_empty() {
        return Err(GatewayError::unexpected_response("empty auth token"));
    }

    let user = match res.data.get("user") {
        Some(Value::Null) | None => None,
        Some(user) => Some(decode_envelope::<User>(user, "user")?),
    };

    Ok(LoginOutcome { auth_token, user })
}

/// `POST users`
pub async fn register_user(
    gateway: &GatewayClient,
    new_user: &NewUser,
) -> Result<User, GatewayError> {
    gateway
        .call(Method::POST, "users", Some(new_user), None)
        .await?
        .decode("user")
}

/// `GET users/me`
pub async fn current_user(gateway: &GatewayClient, token: &str) -> Result<User, GatewayError> {
    gateway.get("users/me", Some(token)).await?.decode("user")
}

/// `PUT users/me`
pub async fn update_current_user(
    gateway: &GatewayClient,
    token: &str,
    update: &ProfileUpdate,
) -> Result<User, GatewayError> {
    gateway
        .call(Method::PUT, "users/me", Some(update), Some(token))
        .await?
        .decode("user")
}

/// `GET workouts/`
///
/// The backend encodes an empty list as `null`.
pub async fn list_workouts(
    gateway: &GatewayClient,
    token: &str,
) -> Result<Vec<Workout>, GatewayError> {
    let res = gateway.get("workouts/", Some(token)).await?;
    if res.data.is_null() {
        return Ok(Vec::new());
    }
    let workouts: Option<Vec<Workout>> = res.decode("workouts")?;
    Ok(workouts.unwrap_or_default())
}

/// `POST workouts/`
pub async fn create_workout(
    gateway: &GatewayClient,
    token: &str,
    draft: &WorkoutDraft,
) -> Result<Workout, GatewayError> {
    gateway
        .call(Method::POST, "workouts/", Some(draft), Some(token))
        .await?
        .decode("workout")
}

/// `GET workouts/{id}`
pub async fn get_workout(
    gateway: &GatewayClient,
    token: &str,
    id: i64,
) -> Result<Workout, GatewayError> {
    gateway
        .get(&format!("workouts/{id}"), Some(token))
        .await?
        .decode("workout")
}

/// `PUT workouts/{id}`
pub async fn update_workout(
    gateway: &GatewayClient,
    token: &str,
    id: i64,
    draft: &WorkoutDraft,
) -> Result<Workout, GatewayError> {
    gateway
        .call(Method::PUT, &format!("workouts/{id}"), Some(draft), Some(token))
        .await?
        .decode("workout")
}

/// `DELETE workouts/{id}`
pub async fn delete_workout(
    gateway: &GatewayClient,
    token: &str,
    id: i64,
) -> Result<(), GatewayError> {
    gateway.delete(&format!("workouts/{id}"), Some(token)).await?;
    Ok(())
}

/// `GET health`
///
/// Returns the body as text: either the plain body or the `status` field of a JSON body.
pub async fn health(gateway: &GatewayClient) -> Result<String, GatewayError> {
    let res = gateway.get("health", None).await?;
    let status = match &res.data {
        Value::String(text) => text.trim().to_string(),
        Value::Null => "ok".to_string(),
        other => other
            .get("status")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| other.to_string()),
    };
    Ok(status)
}
