//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::Url;
use std::fmt;

/// A validated Lemon Squeezy API key.
///
/// The key is sent as a bearer token on every request. It is non-empty and
/// its value is masked in debug output so it never reaches logs by accident.
///
/// # Example
///
/// ```rust
/// use lemon_squeezy::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated webhook signing secret.
///
/// This is the secret entered when a webhook is created in the dashboard or
/// through the API. Like [`ApiKey`], its value is masked in debug output.
///
/// # Example
///
/// ```rust
/// use lemon_squeezy::WebhookSecret;
///
/// let secret = WebhookSecret::new("signing-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "WebhookSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct WebhookSecret(String);

impl WebhookSecret {
    /// Creates a new validated webhook secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyWebhookSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyWebhookSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for WebhookSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for WebhookSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebhookSecret(*****)")
    }
}

/// A validated API host: a scheme plus an authority (`host[:port]`).
///
/// Accepts either a bare host name, which is assumed to be served over
/// HTTPS, or an `http`/`https` URL with no path, query or fragment. The
/// latter form is what test servers and proxies use.
///
/// # Example
///
/// ```rust
/// use lemon_squeezy::ApiHost;
///
/// let host = ApiHost::new("api.lemonsqueezy.com").unwrap();
/// assert_eq!(host.scheme(), "https");
/// assert_eq!(host.authority(), "api.lemonsqueezy.com");
/// assert_eq!(host.base_url(), "https://api.lemonsqueezy.com");
///
/// let local = ApiHost::new("http://127.0.0.1:8080").unwrap();
/// assert_eq!(local.base_url(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiHost {
    scheme: String,
    authority: String,
}

impl ApiHost {
    /// The production API host.
    pub const DEFAULT: &'static str = "api.lemonsqueezy.com";

    /// Creates a new validated API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiHost`] if the value has no host, uses
    /// a scheme other than `http`/`https`, or carries a path, query or
    /// fragment.
    pub fn new(host: impl Into<String>) -> Result<Self, ConfigError> {
        let host = host.into();
        let trimmed = host.trim().trim_end_matches('/');
        let invalid = || ConfigError::InvalidApiHost { host: host.clone() };

        if trimmed.is_empty() {
            return Err(invalid());
        }

        let candidate = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        let url = Url::parse(&candidate).map_err(|_| invalid())?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid());
        }
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(invalid());
        }
        if !url.username().is_empty() || url.password().is_some() {
            return Err(invalid());
        }

        let host_name = url.host_str().ok_or_else(invalid)?;
        let authority = url
            .port()
            .map_or_else(|| host_name.to_string(), |port| format!("{host_name}:{port}"));

        Ok(Self {
            scheme: url.scheme().to_string(),
            authority,
        })
    }

    /// Returns the URL scheme (`https` or `http`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the authority, i.e. the host name plus an explicit port if any.
    #[must_use]
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Returns `scheme://authority` with no trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.authority)
    }
}

impl Default for ApiHost {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            authority: Self::DEFAULT.to_string(),
        }
    }
}

impl fmt::Display for ApiHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority)
    }
}
