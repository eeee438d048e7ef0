//! Discount redemption resource implementation.

use serde::{Deserialize, Serialize};

use crate::rest::{Endpoint, ResourceObject, RestResource};

/// Attributes of a discount redemption.
///
/// The discount fields are a snapshot taken when the order was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRedemptionAttributes {
    pub discount_id: u64,
    pub order_id: u64,
    pub discount_name: String,
    pub discount_code: String,
    pub discount_amount: i64,
    pub discount_amount_type: String,
    /// Amount deducted from the order, in cents.
    pub amount: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl RestResource for DiscountRedemptionAttributes {
    const NAME: &'static str = "DiscountRedemption";
    const TYPE: &'static str = "discount-redemptions";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::DiscountRedemption(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::DiscountRedemptions
    }
}

/// A discount redemption.
pub type DiscountRedemption = ResourceObject<DiscountRedemptionAttributes>;
