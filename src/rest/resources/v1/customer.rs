//! Customer resource implementation.

use serde::{Deserialize, Serialize};

use crate::rest::{Endpoint, ResourceObject, RestResource};

/// Attributes of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAttributes {
    pub store_id: u64,
    pub name: String,
    pub email: String,
    /// `subscribed`, `unsubscribed`, `archived`, `requires_verification` or `invalid_email`.
    pub status: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    /// Lifetime revenue in USD cents.
    pub total_revenue_currency: i64,
    /// Monthly recurring revenue in USD cents.
    pub mrr: i64,
    pub status_formatted: String,
    pub country_formatted: Option<String>,
    pub total_revenue_currency_formatted: String,
    pub mrr_formatted: String,
    pub created_at: String,
    pub updated_at: String,
    pub test_mode: bool,
}

impl RestResource for CustomerAttributes {
    const NAME: &'static str = "Customer";
    const TYPE: &'static str = "customers";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::Customer(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::Customers
    }
}

/// A customer.
pub type Customer = ResourceObject<CustomerAttributes>;
