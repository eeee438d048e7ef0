//! Configuration types for the Lemon Squeezy API client.
//!
//! This module provides the configuration types used to construct a
//! [`RestClient`](crate::clients::RestClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`LemonSqueezyConfig`]: The configuration struct holding all client settings
//! - [`LemonSqueezyConfigBuilder`]: A builder for constructing [`LemonSqueezyConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`ApiHost`]: A validated API host (scheme plus authority)
//! - [`WebhookSecret`]: A validated webhook signing secret
//!
//! # Example
//!
//! ```rust
//! use lemon_squeezy::{ApiKey, LemonSqueezyConfig};
//! use std::time::Duration;
//!
//! let config = LemonSqueezyConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_host().base_url(), "https://api.lemonsqueezy.com");
//! ```

mod newtypes;

pub use newtypes::{ApiHost, ApiKey, WebhookSecret};

use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the API key, read by [`LemonSqueezyConfig::from_env`].
pub const ENV_API_KEY: &str = "LEMONSQUEEZY_API_KEY";

/// Environment variable overriding the API host, read by [`LemonSqueezyConfig::from_env`].
pub const ENV_API_HOST: &str = "LEMONSQUEEZY_API_HOST";

/// Configuration for the Lemon Squeezy API client.
///
/// The configuration is fixed at construction and never mutated afterwards;
/// every client built from it shares the same credentials and host.
///
/// # Thread Safety
///
/// `LemonSqueezyConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use lemon_squeezy::{ApiHost, ApiKey, LemonSqueezyConfig};
///
/// let config = LemonSqueezyConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .api_host(ApiHost::new("http://127.0.0.1:8080").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
/// ```
#[derive(Clone, Debug)]
pub struct LemonSqueezyConfig {
    api_key: ApiKey,
    api_host: ApiHost,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl LemonSqueezyConfig {
    /// Creates a new builder for constructing a `LemonSqueezyConfig`.
    #[must_use]
    pub fn builder() -> LemonSqueezyConfigBuilder {
        LemonSqueezyConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads the API key from `LEMONSQUEEZY_API_KEY` and, if set, the host
    /// from `LEMONSQUEEZY_API_HOST`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if the key variable is unset,
    /// or the validation error of whichever value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| ConfigError::MissingEnvVar { name: ENV_API_KEY })?;

        let mut builder = Self::builder().api_key(ApiKey::new(api_key)?);
        if let Ok(host) = std::env::var(ENV_API_HOST) {
            builder = builder.api_host(ApiHost::new(host)?);
        }
        builder.build()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API host.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify LemonSqueezyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LemonSqueezyConfig>();
};

/// Builder for constructing [`LemonSqueezyConfig`] instances.
///
/// `api_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `api_host`: `https://api.lemonsqueezy.com`
/// - `timeout`: `None` (no client-side timeout)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct LemonSqueezyConfigBuilder {
    api_key: Option<ApiKey>,
    api_host: Option<ApiHost>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl LemonSqueezyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API host.
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets a timeout applied to each request, from connect to end of body.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`LemonSqueezyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<LemonSqueezyConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(LemonSqueezyConfig {
            api_key,
            api_host: self.api_host.unwrap_or_default(),
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
