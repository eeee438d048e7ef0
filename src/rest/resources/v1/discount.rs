//! Discount resource implementation.

use serde::{Deserialize, Serialize};

use crate::rest::{Endpoint, ResourceObject, RestResource};

/// Attributes of a discount code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountAttributes {
    pub store_id: u64,
    pub name: String,
    /// The code customers enter at checkout.
    pub code: String,
    /// Percentage or fixed amount in cents, depending on `amount_type`.
    pub amount: i64,
    /// `percent` or `fixed`.
    pub amount_type: String,
    pub is_limited_to_products: bool,
    pub is_limited_redemptions: bool,
    pub max_redemptions: i64,
    pub starts_at: Option<String>,
    pub expires_at: Option<String>,
    /// `once`, `repeating` or `forever`.
    pub duration: String,
    pub duration_in_months: i64,
    /// `draft` or `published`.
    pub status: String,
    pub status_formatted: String,
    pub created_at: String,
    pub updated_at: String,
    pub test_mode: bool,
}

impl RestResource for DiscountAttributes {
    const NAME: &'static str = "Discount";
    const TYPE: &'static str = "discounts";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::Discount(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::Discounts
    }
}

/// A discount code.
pub type Discount = ResourceObject<DiscountAttributes>;
