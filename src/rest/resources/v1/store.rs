//! Store resource implementation.
//!
//! A store is the top-level container for products, orders and customers.
//! Stores are read-only through the API.
//!
//! # Example
//!
//! ```rust,ignore
//! use lemon_squeezy::rest::resources::Store;
//!
//! let store = Store::find(&client, "1", None).await?;
//! println!("{} sells in {}", store.name, store.currency);
//! ```

use serde::{Deserialize, Serialize};

use crate::rest::{Endpoint, ResourceObject, RestResource};

/// Attributes of a store.
///
/// Revenue figures are in cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreAttributes {
    /// The store name.
    pub name: String,
    /// URL-friendly unique identifier.
    pub slug: String,
    /// The domain, e.g. `my-store.lemonsqueezy.com`.
    pub domain: String,
    /// The fully qualified store URL.
    pub url: String,
    /// The store avatar.
    pub avatar_url: String,
    /// The billing plan, e.g. `fresh` or `sweet`.
    pub plan: Option<String>,
    /// ISO 3166-1 two-letter country code.
    pub country: String,
    /// Full country name.
    pub country_nicename: String,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Number of sales.
    pub total_sales: i64,
    /// Total revenue.
    pub total_revenue: i64,
    /// Sales in the last 30 days.
    pub thirty_day_sales: i64,
    /// Revenue in the last 30 days.
    pub thirty_day_revenue: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl RestResource for StoreAttributes {
    const NAME: &'static str = "Store";
    const TYPE: &'static str = "stores";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::Store(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::Stores
    }
}

/// A store.
pub type Store = ResourceObject<StoreAttributes>;
