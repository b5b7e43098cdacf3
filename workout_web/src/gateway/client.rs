use std::time::Duration;

use http::Method;
use http::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use url::Url;

use super::errors::GatewayError;
use super::types::{GatewayResponse, normalize_response};
use crate::config::{ConfigError, GATEWAY_TIMEOUT_SECS, WORKOUT_API_URL, normalize_base_url};

/// The single outbound path to the backend API
///
/// Knows the base URL, the header contract and the response normalization
/// rules. Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct GatewayClient {
    base_url: Url,
    http: reqwest::Client,
}

impl GatewayClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// - `timeout`: applied to the whole request, so a hung backend surfaces as a 504
    /// - `pool_idle_timeout`: 90 seconds, the reqwest default
    /// - `pool_max_idle_per_host`: 32, plenty for one backend host
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let normalized = normalize_base_url(base_url);
        let base_url = Url::parse(&normalized).map_err(|e| ConfigError::InvalidBaseUrl {
            url: normalized.clone(),
            reason: e.to_string(),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: normalized,
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(32)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { base_url, http })
    }

    /// Creates a client from `WORKOUT_API_URL` and `GATEWAY_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(
            WORKOUT_API_URL.as_str(),
            Duration::from_secs(*GATEWAY_TIMEOUT_SECS),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an endpoint path such as `workouts/12` against the base URL.
    ///
    /// Leading slashes are stripped so `"/users/me"` and `"users/me"` agree.
    /// Endpoints that would resolve outside the base URL are rejected.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, GatewayError> {
        let path = endpoint.trim_start_matches('/');
        let url = self
            .base_url
            .join(path)
            .map_err(|e| GatewayError::new(500, format!("Invalid endpoint {endpoint}: {e}")))?;

        if !url.as_str().starts_with(self.base_url.as_str()) {
            tracing::error!("Endpoint {} escapes backend base {}", endpoint, self.base_url);
            return Err(GatewayError::new(500, format!("Invalid endpoint {endpoint}")));
        }

        Ok(url)
    }

    /// Performs one backend call.
    ///
    /// Adds `Authorization: Bearer <token>` when `token` is given and
    /// `Content-Type: application/json` when `body` is given. The result is
    /// either the normalized response or a `GatewayError`.
    #[tracing::instrument(skip(self, body, token), fields(authenticated = token.is_some()))]
    pub async fn call<B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<GatewayResponse, GatewayError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint)?;

        let mut request = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json");

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(|e| {
                GatewayError::new(500, format!("Failed to encode request body: {e}"))
            })?;
            request = request.header(CONTENT_TYPE, "application/json").body(payload);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Backend call to {} failed: {}", endpoint, e);
            GatewayError::from_transport(&e)
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let text = response.text().await.map_err(|e| {
            tracing::error!("Reading backend response from {} failed: {}", endpoint, e);
            GatewayError::from_transport(&e)
        })?;

        let result = normalize_response(status, content_type.as_deref(), &text);
        match &result {
            Ok(_) => tracing::debug!("Backend responded {} for {}", status, endpoint),
            Err(e) => tracing::debug!("Backend error {} for {}: {}", e.status, endpoint, e),
        }
        result
    }

    pub async fn get(
        &self,
        endpoint: &str,
        token: Option<&str>,
    ) -> Result<GatewayResponse, GatewayError> {
        self.call::<()>(Method::GET, endpoint, None, token).await
    }

    pub async fn delete(
        &self,
        endpoint: &str,
        token: Option<&str>,
    ) -> Result<GatewayResponse, GatewayError> {
        self.call::<()>(Method::DELETE, endpoint, None, token).await
    }
}
