//! Webhook signature verification.
//!
//! Lemon Squeezy signs each delivery with HMAC-SHA256 over the raw request
//! body, keyed by the signing secret set on the webhook, and sends the
//! lowercase hex digest in the `X-Signature` header.
//!
//! - [`verify_webhook`]: Verifies a request and parses the event
//! - [`verify_signature`]: Low-level check for custom integrations
//!
//! # Example
//!
//! ```rust
//! use lemon_squeezy::webhooks::{compute_signature, verify_webhook, WebhookRequest};
//! use lemon_squeezy::WebhookSecret;
//!
//! let secret = WebhookSecret::new("my-signing-secret").unwrap();
//! let body = br#"{"meta":{"event_name":"order_created"},"data":{}}"#;
//! let signature = compute_signature(body, "my-signing-secret");
//!
//! let request = WebhookRequest::new(body.to_vec(), signature, Some("order_created".to_string()));
//! let event = verify_webhook(&secret, &request).unwrap();
//! assert_eq!(event.meta.event_name, "order_created");
//! ```
//!
//! # Security
//!
//! Signatures are compared in constant time. The body must be the exact bytes
//! received; re-serialized JSON will not verify.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::config::WebhookSecret;
use crate::webhooks::{WebhookError, WebhookEvent};

type HmacSha256 = Hmac<Sha256>;

// ============================================================================
// Header Constants
// ============================================================================

/// HTTP header carrying the hex HMAC-SHA256 signature of the body.
pub const HEADER_SIGNATURE: &str = "X-Signature";

/// HTTP header carrying the event name, e.g. `order_created`.
pub const HEADER_EVENT_NAME: &str = "X-Event-Name";

// ============================================================================
// WebhookRequest
// ============================================================================

/// An incoming webhook request.
///
/// The body is kept as raw bytes so the signature is computed over exactly
/// what was received.
#[derive(Debug, Clone)]
pub struct WebhookRequest {
    body: Vec<u8>,
    signature: String,
    event_name: Option<String>,
}

impl WebhookRequest {
    /// Creates a webhook request from its body and headers.
    ///
    /// # Arguments
    ///
    /// * `body` - Raw request body
    /// * `signature` - Value of the `X-Signature` header
    /// * `event_name` - Value of the `X-Event-Name` header, if present
    #[must_use]
    pub const fn new(body: Vec<u8>, signature: String, event_name: Option<String>) -> Self {
        Self {
            body,
            signature,
            event_name,
        }
    }

    /// Returns the raw request body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the `X-Signature` header value.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Returns the `X-Event-Name` header value, if present.
    #[must_use]
    pub fn event_name(&self) -> Option<&str> {
        self.event_name.as_deref()
    }
}

// ============================================================================
// Verification Functions
// ============================================================================

/// Computes the signature Lemon Squeezy sends for a body.
///
/// # Example
///
/// ```rust
/// use lemon_squeezy::webhooks::compute_signature;
///
/// let signature = compute_signature(b"payload", "secret");
/// assert_eq!(signature.len(), 64);
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(raw_body: &[u8], secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(raw_body);
    hex::encode(mac.finalize().into_bytes())
}

/// Verifies a signature against a raw body.
///
/// Returns `true` if `signature` is the HMAC-SHA256 of `raw_body` under
/// `secret`. Hex case is ignored.
///
/// # Example
///
/// ```rust
/// use lemon_squeezy::webhooks::{compute_signature, verify_signature};
///
/// let body = b"webhook payload";
/// let signature = compute_signature(body, "secret");
///
/// assert!(verify_signature("secret", body, &signature));
/// assert!(!verify_signature("secret", body, "invalid"));
/// ```
#[must_use]
pub fn verify_signature(secret: &str, raw_body: &[u8], signature: &str) -> bool {
    let computed = compute_signature(raw_body, secret);
    let received = signature.trim().to_ascii_lowercase();
    computed.as_bytes().ct_eq(received.as_bytes()).into()
}

/// Verifies a webhook request and parses its event.
///
/// # Errors
///
/// - [`WebhookError::InvalidSignature`] if the signature does not match
/// - [`WebhookError::InvalidPayload`] if the body is not a webhook event
pub fn verify_webhook(
    secret: &WebhookSecret,
    request: &WebhookRequest,
) -> Result<WebhookEvent, WebhookError> {
    if !verify_signature(secret.as_ref(), request.body(), request.signature()) {
        tracing::warn!(
            event_name = request.event_name().unwrap_or_default(),
            "Webhook signature verification failed"
        );
        return Err(WebhookError::InvalidSignature);
    }

    let event: WebhookEvent = serde_json::from_slice(request.body())?;
    if let Some(header) = request.event_name() {
        if header != event.meta.event_name {
            tracing::debug!(
                header,
                payload = %event.meta.event_name,
                "Event name header differs from payload"
            );
        }
    }
    Ok(event)
}
