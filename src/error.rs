//! Error types for the Lemon Squeezy API client.
//!
//! This module contains error types used throughout the client for
//! configuration and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use lemon_squeezy::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Lemon Squeezy API key.")]
    EmptyApiKey,

    /// Webhook signing secret cannot be empty.
    #[error("Webhook signing secret cannot be empty.")]
    EmptyWebhookSecret,

    /// API host is invalid.
    #[error("Invalid API host '{host}'. Expected a host name (e.g., 'api.lemonsqueezy.com') or an http(s) URL without a path.")]
    InvalidApiHost {
        /// The invalid host that was provided.
        host: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Environment variable '{name}' is not set.")]
    MissingEnvVar {
        /// The name of the environment variable.
        name: &'static str,
    },
}
