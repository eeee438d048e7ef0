//! Price resource implementation.
//!
//! A price describes how a variant is charged: once, as a subscription, or
//! as a lead magnet, with standard, package, graduated or volume pricing.

use serde::{Deserialize, Serialize};

use crate::rest::{Endpoint, ResourceObject, RestResource};

/// Attributes of a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAttributes {
    pub variant_id: u64,
    /// `one_time`, `subscription`, `lead_magnet` or `pwyw`.
    pub category: String,
    /// `standard`, `package`, `graduated` or `volume`.
    pub scheme: String,
    /// `sum`, `last_during_period`, `last_ever` or `max`. Usage-based only.
    pub usage_aggregation: Option<String>,
    /// Price in cents per unit.
    pub unit_price: i64,
    /// Units per package, for the `package` scheme.
    pub package_size: i64,
    /// Pricing tiers, for the `graduated` and `volume` schemes.
    pub tiers: Option<Vec<PriceTier>>,
    pub renewal_interval_unit: Option<String>,
    pub renewal_interval_quantity: Option<i64>,
    pub trial_interval_unit: Option<String>,
    pub trial_interval_quantity: Option<i64>,
    pub min_price: Option<i64>,
    pub suggested_price: Option<i64>,
    pub tax_code: String,
    pub created_at: String,
    pub updated_at: String,
}

/// One tier of a tiered price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    /// The last unit covered by this tier.
    pub last_unit: TierLastUnit,
    /// Price in cents per unit within this tier.
    pub unit_price: i64,
    /// Flat fee in cents charged for this tier.
    pub fixed_fee: i64,
}

/// Upper bound of a price tier.
///
/// The final tier is open-ended and sent as the string `"inf"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TierLastUnit {
    /// A finite last unit.
    Units(i64),
    /// Any other value, normally `"inf"`.
    Other(String),
}

impl TierLastUnit {
    /// Returns `true` if the tier has no upper bound.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Other(s) if s == "inf")
    }
}

impl RestResource for PriceAttributes {
    const NAME: &'static str = "Price";
    const TYPE: &'static str = "prices";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::Price(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::Prices
    }
}

/// A price.
pub type Price = ResourceObject<PriceAttributes>;
