//! HTTP-specific error types for the Lemon Squeezy API client.
//!
//! This module contains error types for the transport layer: requests that
//! fail validation before they are sent, and failures of the network
//! exchange itself.
//!
//! # Error Handling
//!
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! A non-2xx status is *not* an error at this layer. The response is handed
//! back as-is and the decoder decides what the body means.
//!
//! # Example
//!
//! ```rust,ignore
//! use lemon_squeezy::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
//!
//! match client.execute(request).await {
//!     Ok(response) => println!("Status: {}", response.code),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use lemon_squeezy::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::BodyNotAllowed {
///     method: "GET".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot send a body with GET.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A body was attached to a method that does not carry one.
    #[error("Cannot send a body with {method}.")]
    BodyNotAllowed {
        /// The HTTP method the body was attached to.
        method: String,
    },

    /// A resource ID would not stay a single path segment.
    #[error("Invalid path segment: {segment:?}")]
    InvalidPathSegment {
        /// The offending segment.
        segment: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust,ignore
/// use lemon_squeezy::clients::HttpError;
///
/// match client.execute(request).await {
///     Ok(response) => { /* hand off to the decoder */ }
///     Err(HttpError::InvalidRequest(e)) => { /* caller bug */ }
///     Err(HttpError::Network(e)) => { /* DNS, TLS, timeout, reset */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, TLS or timeout error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns `true` if the request timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}
