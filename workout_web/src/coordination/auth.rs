use super::errors::FlowError;
use crate::gateway::{GatewayClient, endpoints};
use crate::user::{LoginForm, LoginOutcome, RegisterForm, User};

/// Validates the login form and exchanges the credentials for a token.
///
/// A backend rejection keeps its status and message (`401 invalid credentials`)
/// so the login page can show it next to the form.
pub async fn login_core(
    gateway: &GatewayClient,
    form: &LoginForm,
) -> Result<LoginOutcome, FlowError> {
    let credentials = form.validate()?;
    let outcome = endpoints::authenticate(gateway, &credentials).await?;
    tracing::info!("User {} logged in", credentials.username);
    Ok(outcome)
}

pub async fn register_core(
    gateway: &GatewayClient,
    form: &RegisterForm,
) -> Result<User, FlowError> {
    let new_user = form.validate()?;
    let user = endpoints::register_user(gateway, &new_user).await?;
    tracing::info!("Registered user {} ({})", user.username, user.id);
    Ok(user)
}

/// Returns `target` when it is a path on this site, otherwise `default`.
///
/// Rejects absolute URLs, scheme-relative `//host` and `/\host` forms so a
/// crafted login link cannot send the browser elsewhere.
pub fn sanitize_redirect_target(target: Option<&str>, default: &str) -> String {
    match target.map(str::trim) {
        Some(t)
            if t.starts_with('/')
                && !t.starts_with("//")
                && !t.starts_with("/\\")
                && !t.chars().any(char::is_control) =>
        {
            t.to_string()
        }
        Some(t) if !t.is_empty() => {
            tracing::warn!("Ignoring non-local redirect target: {}", t);
            default.to_string()
        }
        _ => default.to_string(),
    }
}
