//! Webhook event payload types.
//!
//! Every delivery carries the same envelope:
//!
//! ```json
//! {
//!   "meta": { "event_name": "order_created", "custom_data": { ... } },
//!   "data": { "type": "orders", "id": "1", "attributes": { ... } }
//! }
//! ```

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::IncludedResource;
use crate::webhooks::WebhookError;

/// Names of the events Lemon Squeezy delivers.
///
/// Unknown names are kept in [`WebhookEventName::Other`] so new events do not
/// break existing handlers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WebhookEventName {
    OrderCreated,
    OrderRefunded,
    SubscriptionCreated,
    SubscriptionUpdated,
    SubscriptionCancelled,
    SubscriptionResumed,
    SubscriptionExpired,
    SubscriptionPaused,
    SubscriptionUnpaused,
    SubscriptionPaymentSuccess,
    SubscriptionPaymentFailed,
    SubscriptionPaymentRecovered,
    SubscriptionPaymentRefunded,
    LicenseKeyCreated,
    LicenseKeyUpdated,
    /// An event this crate does not know, as received.
    Other(String),
}

const KNOWN_EVENTS: &[(&str, WebhookEventName)] = &[
    ("order_created", WebhookEventName::OrderCreated),
    ("order_refunded", WebhookEventName::OrderRefunded),
    ("subscription_created", WebhookEventName::SubscriptionCreated),
    ("subscription_updated", WebhookEventName::SubscriptionUpdated),
    ("subscription_cancelled", WebhookEventName::SubscriptionCancelled),
    ("subscription_resumed", WebhookEventName::SubscriptionResumed),
    ("subscription_expired", WebhookEventName::SubscriptionExpired),
    ("subscription_paused", WebhookEventName::SubscriptionPaused),
    ("subscription_unpaused", WebhookEventName::SubscriptionUnpaused),
    (
        "subscription_payment_success",
        WebhookEventName::SubscriptionPaymentSuccess,
    ),
    (
        "subscription_payment_failed",
        WebhookEventName::SubscriptionPaymentFailed,
    ),
    (
        "subscription_payment_recovered",
        WebhookEventName::SubscriptionPaymentRecovered,
    ),
    (
        "subscription_payment_refunded",
        WebhookEventName::SubscriptionPaymentRefunded,
    ),
    ("license_key_created", WebhookEventName::LicenseKeyCreated),
    ("license_key_updated", WebhookEventName::LicenseKeyUpdated),
];

impl WebhookEventName {
    /// Parses an event name. Never fails; unknown names become [`Self::Other`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        KNOWN_EVENTS
            .iter()
            .find(|(known, _)| *known == name)
            .map_or_else(|| Self::Other(name.to_string()), |(_, event)| event.clone())
    }

    /// Returns the event name as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Other(name) => name.as_str(),
            known => KNOWN_EVENTS
                .iter()
                .find(|(_, event)| event == known)
                .map_or("", |(name, _)| *name),
        }
    }

    /// Returns `true` for the `subscription_payment_*` events, whose data is
    /// a subscription invoice.
    #[must_use]
    pub const fn is_subscription_payment(&self) -> bool {
        matches!(
            self,
            Self::SubscriptionPaymentSuccess
                | Self::SubscriptionPaymentFailed
                | Self::SubscriptionPaymentRecovered
                | Self::SubscriptionPaymentRefunded
        )
    }
}

impl fmt::Display for WebhookEventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `meta` block of a webhook delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMeta {
    pub event_name: String,
    /// Custom data passed at checkout, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<String>,
}

/// A verified webhook delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub meta: WebhookMeta,
    /// The resource object the event is about, as raw JSON.
    pub data: Value,
}

impl WebhookEvent {
    /// Returns the parsed event name.
    #[must_use]
    pub fn event_name(&self) -> WebhookEventName {
        WebhookEventName::parse(&self.meta.event_name)
    }

    /// Decodes `data` with the included-resource decoder.
    ///
    /// Subscription invoices are not part of that set; use
    /// [`data_as`](Self::data_as) for `subscription_payment_*` events.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::CorruptData`] if `data` matches no known
    /// resource.
    pub fn resource(&self) -> Result<IncludedResource, WebhookError> {
        Ok(IncludedResource::from_value(self.data.clone())?)
    }

    /// Decodes `data` into a specific type, e.g. `SubscriptionInvoice`.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::InvalidPayload`] if `data` does not match `T`.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, WebhookError> {
        Ok(T::deserialize(&self.data)?)
    }
}
