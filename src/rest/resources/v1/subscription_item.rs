//! Subscription item resource implementation.
//!
//! A subscription item links a subscription to a price and holds the
//! billed quantity.
//!
//! # Special Operations
//!
//! - `SubscriptionItem::update()` - Change the quantity
//! - `SubscriptionItem::current_usage()` - Usage in the current billing period
//!
//! # Example
//!
//! ```rust,ignore
//! use lemon_squeezy::rest::resources::SubscriptionItem;
//!
//! let usage = SubscriptionItem::current_usage(&client, "1").await?;
//! println!(
//!     "{} units between {} and {}",
//!     usage.meta.quantity, usage.meta.period_start, usage.meta.period_end
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{RestClient, RestError};
use crate::rest::{Data, Endpoint, MetaOnly, ResourceObject, RestResource, WriteBody};

/// Attributes of a subscription item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionItemAttributes {
    pub subscription_id: u64,
    pub price_id: u64,
    /// Units billed. Always `0` for usage-based items.
    pub quantity: i64,
    pub is_usage_based: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Usage of a usage-based subscription item in the current period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUsage {
    pub period_start: String,
    pub period_end: String,
    /// Aggregated usage so far.
    pub quantity: i64,
    /// `day`, `week`, `month` or `year`.
    pub interval_unit: String,
    pub interval_quantity: i64,
}

impl RestResource for SubscriptionItemAttributes {
    const NAME: &'static str = "SubscriptionItem";
    const TYPE: &'static str = "subscription-items";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::SubscriptionItem(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::SubscriptionItems
    }
}

/// A subscription item.
pub type SubscriptionItem = ResourceObject<SubscriptionItemAttributes>;

impl SubscriptionItem {
    /// Updates a subscription item.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use
    /// * `id` - The subscription item ID
    /// * `body` - A JSON:API document carrying the new `quantity`
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
        client
            .patch(&Endpoint::SubscriptionItem(id.into()), body)
            .await
    }

    /// Retrieves usage for the current billing period.
    ///
    /// Only usage-based items have usage; the server answers with an error
    /// for other items.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the response is not a
    /// usage document.
    pub async fn current_usage(
        client: &RestClient,
        id: impl Into<String>,
    ) -> Result<MetaOnly<CurrentUsage>, RestError> {
        client
            .get(&Endpoint::SubscriptionItemCurrentUsage(id.into()), None, None)
            .await
    }
}
