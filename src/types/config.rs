//! Client configuration and credentials

use super::constants::{env as env_vars, DEFAULT_BASE_URL};
use crate::{CitadelError, Result};
use std::env;
use std::time::Duration;

/// API credentials
///
/// The secret token signs private calls, the public token identifies the
/// merchant on public ones. Neither is ever printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_secret: String,
    api_public: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_secret", &"<redacted>")
            .field("api_public", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Create credentials from a secret and a public token
    pub fn new(api_secret: impl Into<String>, api_public: impl Into<String>) -> Self {
        Self {
            api_secret: api_secret.into(),
            api_public: api_public.into(),
        }
    }

    /// Secret token
    pub fn secret(&self) -> &str {
        &self.api_secret
    }

    /// Public token
    pub fn public(&self) -> &str {
        &self.api_public
    }
}

/// Merchant client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the merchant API
    pub base_url: String,
    /// API credentials
    pub credentials: Credentials,
    /// Request timeout, none by default
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a config for the default API endpoint
    pub fn new(api_secret: impl Into<String>, api_public: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials::new(api_secret, api_public),
            timeout: None,
        }
    }

    /// Create a config from `CITADEL_API_SECRET`, `CITADEL_API_PUBLIC` and
    /// the optional `CITADEL_BASE_URL`
    pub fn from_env() -> Result<Self> {
        let secret = env::var(env_vars::API_SECRET).unwrap_or_default();
        let public = env::var(env_vars::API_PUBLIC).unwrap_or_default();

        if secret.is_empty() || public.is_empty() {
            return Err(CitadelError::config(format!(
                "Missing credentials: {} and {} must be set",
                env_vars::API_SECRET,
                env_vars::API_PUBLIC
            )));
        }

        let mut config = Self::new(secret, public);
        if let Ok(base_url) = env::var(env_vars::BASE_URL) {
            if !base_url.is_empty() {
                config = config.with_base_url(base_url);
            }
        }
        Ok(config)
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.credentials.secret().is_empty() {
            return Err(CitadelError::config("API secret cannot be empty"));
        }
        if self.credentials.public().is_empty() {
            return Err(CitadelError::config("API public token cannot be empty"));
        }

        let url = url::Url::parse(&self.base_url)
            .map_err(|e| CitadelError::config(format!("Invalid base URL: {}", e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(CitadelError::config(
                "Base URL must start with http:// or https://",
            ));
        }

        Ok(())
    }
}
