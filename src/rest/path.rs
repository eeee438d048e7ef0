//! Route resolution for Lemon Squeezy API endpoints.
//!
//! Every operation the client can perform is named by one [`Endpoint`]
//! variant. Resolving an endpoint yields its path under `/v1` and any query
//! items the route itself requires.
//!
//! # Example
//!
//! ```rust
//! use lemon_squeezy::rest::Endpoint;
//!
//! let route = Endpoint::Order("42".to_string()).resolve();
//! assert_eq!(route.path, "/v1/orders/42");
//! assert!(route.query.is_empty());
//!
//! let route = Endpoint::SubscriptionItemCurrentUsage("7".to_string()).resolve();
//! assert_eq!(route.path, "/v1/subscription-items/7/current-usage");
//! ```

use crate::rest::query::QueryParams;

/// API version prefix shared by every route.
pub const API_PREFIX: &str = "/v1";

/// A Lemon Squeezy API route.
///
/// Singular variants carry the resource ID, which is interpolated verbatim
/// into the path. Plural variants name the collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The authenticated user (`/v1/users/me`).
    Me,
    /// All stores.
    Stores,
    /// A single store.
    Store(String),
    /// All products.
    Products,
    /// A single product.
    Product(String),
    /// All variants.
    Variants,
    /// A single variant.
    Variant(String),
    /// All prices.
    Prices,
    /// A single price.
    Price(String),
    /// All files.
    Files,
    /// A single file.
    File(String),
    /// All orders.
    Orders,
    /// A single order.
    Order(String),
    /// All order items.
    OrderItems,
    /// A single order item.
    OrderItem(String),
    /// All subscriptions.
    Subscriptions,
    /// A single subscription.
    Subscription(String),
    /// All subscription invoices.
    SubscriptionInvoices,
    /// A single subscription invoice.
    SubscriptionInvoice(String),
    /// All subscription items.
    SubscriptionItems,
    /// A single subscription item.
    SubscriptionItem(String),
    /// Current billing period usage of a usage-based subscription item.
    SubscriptionItemCurrentUsage(String),
    /// All usage records.
    UsageRecords,
    /// A single usage record.
    UsageRecord(String),
    /// All discounts.
    Discounts,
    /// A single discount.
    Discount(String),
    /// All discount redemptions.
    DiscountRedemptions,
    /// A single discount redemption.
    DiscountRedemption(String),
    /// All license keys.
    LicenseKeys,
    /// A single license key.
    LicenseKey(String),
    /// All license key instances.
    LicenseKeyInstances,
    /// A single license key instance.
    LicenseKeyInstance(String),
    /// All checkouts.
    Checkouts,
    /// A single checkout.
    Checkout(String),
    /// All customers.
    Customers,
    /// A single customer.
    Customer(String),
    /// All webhooks.
    Webhooks,
    /// A single webhook.
    Webhook(String),
    /// License API: activate a key.
    ActivateLicense,
    /// License API: validate a key or instance.
    ValidateLicense,
    /// License API: deactivate an instance.
    DeactivateLicense,
}

/// The result of resolving an [`Endpoint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Absolute path, starting with `/v1/`.
    pub path: String,
    /// Query items the route itself requires. Appended after caller items.
    pub query: QueryParams,
    /// Path segments after the prefix, IDs kept whole.
    pub(crate) segments: Vec<String>,
}

impl ResolvedRoute {
    fn new(segments: Vec<String>) -> Self {
        Self {
            path: format!("{API_PREFIX}/{}", segments.join("/")),
            query: QueryParams::new(),
            segments,
        }
    }
}

fn collection(name: &str) -> ResolvedRoute {
    ResolvedRoute::new(name.split('/').map(str::to_string).collect())
}

fn member(name: &str, id: &str) -> ResolvedRoute {
    ResolvedRoute::new(vec![name.to_string(), id.to_string()])
}

impl Endpoint {
    /// Resolves the endpoint to its path and intrinsic query items.
    ///
    /// Pure and total: every variant has exactly one route.
    #[must_use]
    pub fn resolve(&self) -> ResolvedRoute {
        match self {
            Self::Me => collection("users/me"),
            Self::Stores => collection("stores"),
            Self::Store(id) => member("stores", id),
            Self::Products => collection("products"),
            Self::Product(id) => member("products", id),
            Self::Variants => collection("variants"),
            Self::Variant(id) => member("variants", id),
            Self::Prices => collection("prices"),
            Self::Price(id) => member("prices", id),
            Self::Files => collection("files"),
            Self::File(id) => member("files", id),
            Self::Orders => collection("orders"),
            Self::Order(id) => member("orders", id),
            Self::OrderItems => collection("order-items"),
            Self::OrderItem(id) => member("order-items", id),
            Self::Subscriptions => collection("subscriptions"),
            Self::Subscription(id) => member("subscriptions", id),
            Self::SubscriptionInvoices => collection("subscription-invoices"),
            Self::SubscriptionInvoice(id) => member("subscription-invoices", id),
            Self::SubscriptionItems => collection("subscription-items"),
            Self::SubscriptionItem(id) => member("subscription-items", id),
            Self::SubscriptionItemCurrentUsage(id) => ResolvedRoute::new(vec![
                "subscription-items".to_string(),
                id.clone(),
                "current-usage".to_string(),
            ]),
            Self::UsageRecords => collection("usage-records"),
            Self::UsageRecord(id) => member("usage-records", id),
            Self::Discounts => collection("discounts"),
            Self::Discount(id) => member("discounts", id),
            Self::DiscountRedemptions => collection("discount-redemptions"),
            Self::DiscountRedemption(id) => member("discount-redemptions", id),
            Self::LicenseKeys => collection("license-keys"),
            Self::LicenseKey(id) => member("license-keys", id),
            Self::LicenseKeyInstances => collection("license-key-instances"),
            Self::LicenseKeyInstance(id) => member("license-key-instances", id),
            Self::Checkouts => collection("checkouts"),
            Self::Checkout(id) => member("checkouts", id),
            Self::Customers => collection("customers"),
            Self::Customer(id) => member("customers", id),
            Self::Webhooks => collection("webhooks"),
            Self::Webhook(id) => member("webhooks", id),
            Self::ActivateLicense => collection("licenses/activate"),
            Self::ValidateLicense => collection("licenses/validate"),
            Self::DeactivateLicense => collection("licenses/deactivate"),
        }
    }
}
