//! Subscription resource implementation.
//!
//! Subscriptions are created from subscription variants at checkout.
//!
//! # Special Operations
//!
//! - `Subscription::update()` - Change plan, pause, billing anchor and so on
//! - `Subscription::cancel()` - Cancel at the end of the current period
//!
//! # Example
//!
//! ```rust,ignore
//! use lemon_squeezy::rest::{json_api_body, WriteBody};
//! use lemon_squeezy::rest::resources::Subscription;
//! use serde_json::json;
//!
//! let mut attributes = WriteBody::new();
//! attributes.insert("pause".to_string(), json!({"mode": "void"}));
//!
//! let body = json_api_body("subscriptions", Some("1"), attributes);
//! let paused = Subscription::update(&client, "1", &body).await?;
//! assert!(paused.pause.is_some());
//!
//! let cancelled = Subscription::cancel(&client, "1").await?;
//! println!("Ends at {:?}", cancelled.ends_at);
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{RestClient, RestError};
use crate::rest::{Data, Endpoint, ResourceObject, RestResource, WriteBody};

/// Attributes of a subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionAttributes {
    pub store_id: u64,
    pub customer_id: u64,
    pub order_id: u64,
    pub order_item_id: u64,
    pub product_id: u64,
    pub variant_id: u64,
    pub product_name: String,
    pub variant_name: String,
    pub user_name: String,
    pub user_email: String,
    /// `on_trial`, `active`, `paused`, `past_due`, `unpaid`, `cancelled` or `expired`.
    pub status: String,
    pub status_formatted: String,
    pub card_brand: String,
    pub card_last_four: String,
    /// Present while payment collection is paused.
    pub pause: Option<SubscriptionPause>,
    pub cancelled: bool,
    pub trial_ends_at: Option<String>,
    /// Day of the month on which the subscription renews.
    pub billing_anchor: i64,
    pub first_subscription_item: FirstSubscriptionItem,
    pub urls: SubscriptionUrls,
    pub renews_at: Option<String>,
    pub ends_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub test_mode: bool,
}

/// Payment collection pause settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionPause {
    /// `void` (services stop) or `free` (services continue).
    pub mode: String,
    /// When collection resumes. `None` pauses indefinitely.
    pub resumes_at: Option<String>,
}

/// The first item of a subscription, embedded in the subscription attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstSubscriptionItem {
    pub id: u64,
    pub subscription_id: u64,
    pub price_id: u64,
    pub quantity: i64,
    pub is_usage_based: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Signed customer-facing links for a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionUrls {
    /// Expires after 24 hours.
    pub update_payment_method: String,
    /// Expires after 24 hours.
    pub customer_portal: String,
}

impl RestResource for SubscriptionAttributes {
    const NAME: &'static str = "Subscription";
    const TYPE: &'static str = "subscriptions";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::Subscription(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::Subscriptions
    }
}

/// A subscription.
pub type Subscription = ResourceObject<SubscriptionAttributes>;

impl Subscription {
    /// Updates a subscription.
    ///
    /// Sends a PATCH to `/subscriptions/{id}` with the body as given.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use
    /// * `id` - The subscription ID
    /// * `body` - A JSON:API document, see [`json_api_body`](crate::rest::json_api_body)
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the server rejects the
    /// update.
    pub async fn update(
        client: &RestClient,
        id: impl Into<String>,
        body: &WriteBody,
    ) -> Result<Data<Self>, RestError> {
        client.patch(&Endpoint::Subscription(id.into()), body).await
    }

    /// Cancels a subscription.
    ///
    /// The subscription stays active until the end of the current billing
    /// period, then moves to `expired`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the server rejects the
    /// cancellation.
    pub async fn cancel(client: &RestClient, id: impl Into<String>) -> Result<Data<Self>, RestError> {
        client.delete(&Endpoint::Subscription(id.into())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_with_pause_and_first_item() {
        let json = r#"{
            "type": "subscriptions",
            "id": "1",
            "attributes": {
                "store_id": 1,
                "customer_id": 1,
                "order_id": 1,
                "order_item_id": 1,
                "product_id": 1,
                "variant_id": 1,
                "product_name": "Example Product",
                "variant_name": "Example Variant",
                "user_name": "Darlene Daugherty",
                "user_email": "gernser@yahoo.com",
                "status": "paused",
                "status_formatted": "Paused",
                "card_brand": "visa",
                "card_last_four": "4242",
                "pause": {"mode": "void", "resumes_at": null},
                "cancelled": false,
                "trial_ends_at": null,
                "billing_anchor": 12,
                "first_subscription_item": {
                    "id": 1,
                    "subscription_id": 1,
                    "price_id": 1,
                    "quantity": 5,
                    "is_usage_based": false,
                    "created_at": "2023-07-18T12:16:24.000000Z",
                    "updated_at": "2023-07-18T12:16:24.000000Z"
                },
                "urls": {
                    "update_payment_method": "https://my-store.lemonsqueezy.com/subscription/1/payment-details?expires=1666869343&signature=9985e3bf",
                    "customer_portal": "https://my-store.lemonsqueezy.com/billing?expires=1666869343&signature=82ae290c"
                },
                "renews_at": "2022-11-12T00:00:00.000000Z",
                "ends_at": null,
                "created_at": "2021-08-11T13:47:27.000000Z",
                "updated_at": "2021-08-11T13:54:19.000000Z",
                "test_mode": false
            }
        }"#;

        let subscription: Subscription = serde_json::from_str(json).unwrap();

        let pause = subscription.pause.as_ref().unwrap();
        assert_eq!(pause.mode, "void");
        assert!(pause.resumes_at.is_none());
        assert_eq!(subscription.first_subscription_item.quantity, 5);
        assert!(subscription.urls.customer_portal.contains("billing"));
    }

    #[test]
    fn test_subscription_endpoints() {
        assert_eq!(
            SubscriptionAttributes::find_endpoint("9".to_string())
                .resolve()
                .path,
            "/v1/subscriptions/9"
        );
        assert_eq!(
            SubscriptionAttributes::list_endpoint().resolve().path,
            "/v1/subscriptions"
        );
    }
}
