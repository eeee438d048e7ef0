//! Webhook verification for incoming Lemon Squeezy deliveries.
//!
//! # Overview
//!
//! - [`verify_webhook`]: Checks the `X-Signature` header and parses the event
//! - [`verify_signature`] / [`compute_signature`]: Low-level HMAC helpers
//! - [`WebhookRequest`]: The raw body and headers of a delivery
//! - [`WebhookEvent`]: A parsed delivery, with [`WebhookEventName`]
//! - [`WebhookError`]: Error types for verification and decoding
//!
//! Managing webhook subscriptions themselves is done through the REST
//! resource [`Webhook`](crate::rest::resources::Webhook).
//!
//! # Example
//!
//! ```rust,ignore
//! use lemon_squeezy::rest::IncludedResource;
//! use lemon_squeezy::rest::resources::SubscriptionInvoice;
//! use lemon_squeezy::webhooks::{
//!     verify_webhook, WebhookError, WebhookEventName, WebhookRequest, HEADER_EVENT_NAME,
//!     HEADER_SIGNATURE,
//! };
//!
//! fn handle(secret: &WebhookSecret, body: Vec<u8>, headers: &HeaderMap) -> Result<(), WebhookError> {
//!     let request = WebhookRequest::new(
//!         body,
//!         header(headers, HEADER_SIGNATURE).unwrap_or_default(),
//!         header(headers, HEADER_EVENT_NAME),
//!     );
//!     let event = verify_webhook(secret, &request)?;
//!
//!     match event.event_name() {
//!         WebhookEventName::OrderCreated => {
//!             if let IncludedResource::Order(order) = event.resource()? {
//!                 println!("New order {}", order.identifier);
//!             }
//!         }
//!         name if name.is_subscription_payment() => {
//!             let invoice: SubscriptionInvoice = event.data_as()?;
//!             println!("{name}: {}", invoice.total_formatted);
//!         }
//!         other => println!("Ignoring {other}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Thread Safety
//!
//! All types in this module are `Send + Sync`.

mod errors;
mod types;
mod verification;

pub use errors::WebhookError;
pub use types::{WebhookEvent, WebhookEventName, WebhookMeta};
pub use verification::{
    compute_signature, verify_signature, verify_webhook, WebhookRequest, HEADER_EVENT_NAME,
    HEADER_SIGNATURE,
};
