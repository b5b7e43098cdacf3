use workout_web::{ConfigError, GatewayClient};

/// Shared state of the web app
///
/// Holds nothing mutable; the gateway client wraps a connection pool and is
/// cheap to clone into every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub gateway: GatewayClient,
}

impl AppState {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }

    /// Builds the state from `WORKOUT_API_URL` and `GATEWAY_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(GatewayClient::from_env()?))
    }
}
