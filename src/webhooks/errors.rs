//! Webhook-specific error types.
//!
//! # Example
//!
//! ```rust
//! use lemon_squeezy::webhooks::WebhookError;
//!
//! let error = WebhookError::InvalidSignature;
//! assert!(error.to_string().contains("signature"));
//! ```

use crate::rest::CorruptDataError;
use thiserror::Error;

/// Error type for webhook verification and decoding.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The `X-Signature` header does not match the body.
    ///
    /// The request may have been forged or altered in transit, or the
    /// signing secret does not match the one configured for the webhook.
    #[error("Webhook signature verification failed")]
    InvalidSignature,

    /// The body is signed correctly but is not a webhook event.
    #[error("Invalid webhook payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// The event data matches no known resource.
    #[error(transparent)]
    CorruptData(#[from] CorruptDataError),
}
