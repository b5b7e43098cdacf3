use super::errors::FlowError;
use crate::gateway::{GatewayClient, endpoints};
use crate::session::Session;
use crate::user::{ProfileForm, User};

/// The signed-in user, fetched again when the session could not be verified up front.
pub async fn load_profile_core(
    gateway: &GatewayClient,
    session: &Session,
) -> Result<User, FlowError> {
    if let Some(user) = &session.user {
        return Ok(user.clone());
    }
    let token = session.bearer().ok_or(FlowError::SessionExpired)?;
    endpoints::current_user(gateway, token)
        .await
        .map_err(|e| FlowError::from_authenticated(e, "User not found."))
}

pub async fn update_profile_core(
    gateway: &GatewayClient,
    token: &str,
    form: &ProfileForm,
) -> Result<User, FlowError> {
    let update = form.validate()?;
    let user = endpoints::update_current_user(gateway, token, &update)
        .await
        .map_err(|e| FlowError::from_authenticated(e, "User not found."))?;
    tracing::info!("Updated profile of user {}", user.id);
    Ok(user)
}
