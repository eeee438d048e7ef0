//! Variant resource implementation.
//!
//! Variants are the purchasable options of a product. A product without
//! explicit options still has one default variant.

use serde::{Deserialize, Serialize};

use crate::rest::{Endpoint, ResourceObject, RestResource};

/// Attributes of a product variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantAttributes {
    pub product_id: u64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Price in cents.
    pub price: i64,
    pub is_subscription: bool,
    /// Billing interval for subscriptions: `day`, `week`, `month` or `year`.
    pub interval: Option<String>,
    pub interval_count: Option<i64>,
    pub has_free_trial: bool,
    pub trial_interval: String,
    pub trial_interval_count: Option<i64>,
    pub pay_what_you_want: bool,
    pub min_price: i64,
    pub suggested_price: i64,
    pub has_license_keys: bool,
    pub license_activation_limit: i64,
    pub is_license_limit_unlimited: bool,
    pub license_length_value: i64,
    pub license_length_unit: String,
    pub is_license_length_unlimited: bool,
    pub sort: i64,
    /// `pending`, `draft` or `published`.
    pub status: String,
    pub status_formatted: String,
    pub created_at: String,
    pub updated_at: String,
}

impl RestResource for VariantAttributes {
    const NAME: &'static str = "Variant";
    const TYPE: &'static str = "variants";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::Variant(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::Variants
    }
}

/// A product variant.
pub type Variant = ResourceObject<VariantAttributes>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_subscription_fields() {
        let json = r#"{
            "type": "variants",
            "id": "1",
            "attributes": {
                "product_id": 1,
                "name": "Monthly",
                "slug": "monthly",
                "description": null,
                "price": 999,
                "is_subscription": true,
                "interval": "month",
                "interval_count": 1,
                "has_free_trial": true,
                "trial_interval": "day",
                "trial_interval_count": 14,
                "pay_what_you_want": false,
                "min_price": 0,
                "suggested_price": 0,
                "has_license_keys": false,
                "license_activation_limit": 5,
                "is_license_limit_unlimited": false,
                "license_length_value": 1,
                "license_length_unit": "years",
                "is_license_length_unlimited": false,
                "sort": 1,
                "status": "published",
                "status_formatted": "Published",
                "created_at": "2023-05-24T14:15:06.000000Z",
                "updated_at": "2023-06-24T14:44:38.000000Z"
            }
        }"#;

        let variant: Variant = serde_json::from_str(json).unwrap();

        assert!(variant.is_subscription);
        assert_eq!(variant.interval.as_deref(), Some("month"));
        assert_eq!(variant.trial_interval_count, Some(14));
    }
}
