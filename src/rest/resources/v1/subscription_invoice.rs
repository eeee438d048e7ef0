//! Subscription invoice resource implementation.
//!
//! An invoice is issued for every subscription payment, including the
//! initial one.

use serde::{Deserialize, Serialize};

use crate::rest::{Endpoint, ResourceObject, RestResource};

/// Attributes of a subscription invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionInvoiceAttributes {
    pub store_id: u64,
    pub subscription_id: u64,
    pub customer_id: u64,
    pub user_name: String,
    pub user_email: String,
    /// `initial`, `renewal` or `updated`.
    pub billing_reason: String,
    pub card_brand: String,
    pub card_last_four: String,
    pub currency: String,
    pub currency_rate: String,
    /// `pending`, `paid`, `void`, `refunded` or `partial_refund`.
    pub status: String,
    pub status_formatted: String,
    pub refunded: bool,
    pub refunded_at: Option<String>,
    pub subtotal: i64,
    pub discount_total: i64,
    pub tax: i64,
    pub total: i64,
    pub subtotal_usd: i64,
    pub discount_total_usd: i64,
    pub tax_usd: i64,
    pub total_usd: i64,
    pub subtotal_formatted: String,
    pub discount_total_formatted: String,
    pub tax_formatted: String,
    pub total_formatted: String,
    pub urls: SubscriptionInvoiceUrls,
    pub created_at: String,
    pub updated_at: String,
    pub test_mode: bool,
}

/// Links attached to a subscription invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionInvoiceUrls {
    /// The downloadable invoice. `None` until the invoice is paid.
    pub invoice_url: Option<String>,
}

impl RestResource for SubscriptionInvoiceAttributes {
    const NAME: &'static str = "SubscriptionInvoice";
    const TYPE: &'static str = "subscription-invoices";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::SubscriptionInvoice(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::SubscriptionInvoices
    }
}

/// A subscription invoice.
pub type SubscriptionInvoice = ResourceObject<SubscriptionInvoiceAttributes>;
