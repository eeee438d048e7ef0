//! Webhook resource implementation.
//!
//! These are the webhook subscriptions configured on a store. Verifying
//! incoming deliveries is handled by [`crate::webhooks`].

use serde::{Deserialize, Serialize};

use crate::rest::{Endpoint, ResourceObject, RestResource};

/// Attributes of a webhook subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookAttributes {
    pub store_id: u64,
    /// The endpoint deliveries are sent to.
    pub url: String,
    /// Subscribed event names, e.g. `order_created`.
    pub events: Vec<String>,
    pub last_sent_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub test_mode: bool,
}

impl RestResource for WebhookAttributes {
    const NAME: &'static str = "Webhook";
    const TYPE: &'static str = "webhooks";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::Webhook(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::Webhooks
    }
}

/// A webhook subscription.
pub type Webhook = ResourceObject<WebhookAttributes>;
