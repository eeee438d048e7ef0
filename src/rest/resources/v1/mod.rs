//! REST resources for API version `v1`.
//!
//! # Available Resources
//!
//! ## Catalog
//!
//! - [`Store`] - A store
//! - [`Product`] - A product in a store
//! - [`Variant`] - A purchasable option of a product
//! - [`Price`] - How a variant is charged, with [`PriceTier`] and [`TierLastUnit`]
//! - [`File`] - A download attached to a variant
//!
//! ## Sales
//!
//! - [`Order`] - A completed purchase, with [`OrderUrls`] and [`FirstOrderItem`]
//! - [`OrderItem`] - A line of an order
//! - [`Customer`] - A buyer
//! - [`Discount`] - A discount code
//! - [`DiscountRedemption`] - A discount applied to an order
//! - [`Checkout`] - A pre-filled purchase link
//!
//! `Checkout::create()` creates a checkout.
//!
//! ## Subscriptions
//!
//! - [`Subscription`] - A recurring purchase, with [`SubscriptionPause`],
//!   [`FirstSubscriptionItem`] and [`SubscriptionUrls`]
//! - [`SubscriptionInvoice`] - An invoice for one subscription payment
//! - [`SubscriptionItem`] - The price and quantity of a subscription
//! - [`UsageRecord`] - Reported usage of a usage-based item
//!
//! Resource-specific operations:
//! - `Subscription::update()` / `Subscription::cancel()`
//! - `SubscriptionItem::update()` / `SubscriptionItem::current_usage()`
//!
//! ## Licensing
//!
//! - [`LicenseKey`] - A license key issued for an order item
//! - [`LicenseKeyInstance`] - One activation of a license key
//! - [`ActivateLicense`], [`ValidateLicense`], [`DeactivateLicense`] - License API results
//!
//! ## Account
//!
//! - [`User`] - The owner of the API key, via `User::me()`
//! - [`Webhook`] - A webhook subscription on a store
//!
//! # Common Operations
//!
//! Every resource with a collection route gets `find()` and `all()` from
//! [`RestResource`](crate::rest::RestResource):
//!
//! ```rust,ignore
//! use lemon_squeezy::rest::Pagination;
//! use lemon_squeezy::rest::resources::v1::{Discount, Variant};
//!
//! let variant = Variant::find(&client, "1", None).await?;
//! let discounts = Discount::all(&client, Some(Pagination::page(1).with_size(50)), None).await?;
//! ```

mod common;

mod checkout;
mod customer;
mod discount;
mod discount_redemption;
mod file;
mod license;
mod license_key;
mod license_key_instance;
mod order;
mod order_item;
mod price;
mod product;
mod store;
mod subscription;
mod subscription_invoice;
mod subscription_item;
mod usage_record;
mod user;
mod variant;
mod webhook;

pub use checkout::{
    BillingAddress, Checkout, CheckoutAttributes, CheckoutData, CheckoutOptions, ProductOptions,
};
pub use customer::{Customer, CustomerAttributes};
pub use discount::{Discount, DiscountAttributes};
pub use discount_redemption::{DiscountRedemption, DiscountRedemptionAttributes};
pub use file::{File, FileAttributes};
pub use license::{
    ActivateLicense, DeactivateLicense, LicenseInstance, LicenseKeyDetails, LicenseMeta,
    ValidateLicense,
};
pub use license_key::{LicenseKey, LicenseKeyAttributes};
pub use license_key_instance::{LicenseKeyInstance, LicenseKeyInstanceAttributes};
pub use order::{FirstOrderItem, Order, OrderAttributes, OrderUrls};
pub use order_item::{OrderItem, OrderItemAttributes};
pub use price::{Price, PriceAttributes, PriceTier, TierLastUnit};
pub use product::{Product, ProductAttributes};
pub use store::{Store, StoreAttributes};
pub use subscription::{
    FirstSubscriptionItem, Subscription, SubscriptionAttributes, SubscriptionPause,
    SubscriptionUrls,
};
pub use subscription_invoice::{
    SubscriptionInvoice, SubscriptionInvoiceAttributes, SubscriptionInvoiceUrls,
};
pub use subscription_item::{CurrentUsage, SubscriptionItem, SubscriptionItemAttributes};
pub use usage_record::{UsageRecord, UsageRecordAttributes};
pub use user::{User, UserAttributes};
pub use variant::{Variant, VariantAttributes};
pub use webhook::{Webhook, WebhookAttributes};
