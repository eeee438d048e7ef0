//! License key resource implementation.
//!
//! This is the store-side view of license keys. Activating and validating
//! keys from an application goes through the license API, see
//! [`RestClient::activate_license`](crate::RestClient::activate_license).

use serde::{Deserialize, Serialize};

use super::common::bool_or_int;
use crate::rest::{Endpoint, ResourceObject, RestResource};

/// Attributes of a license key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseKeyAttributes {
    pub store_id: u64,
    pub customer_id: Option<u64>,
    pub order_id: u64,
    pub order_item_id: u64,
    pub product_id: u64,
    pub user_name: String,
    pub user_email: String,
    /// The last few characters of the key, safe to display.
    pub key_short: String,
    pub activation_limit: i64,
    pub instances_count: i64,
    /// Sent as `0`/`1` by some API versions.
    #[serde(deserialize_with = "bool_or_int")]
    pub disabled: bool,
    /// `inactive`, `active`, `expired` or `disabled`.
    pub status: String,
    pub status_formatted: String,
    pub expires_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub test_mode: bool,
}

impl RestResource for LicenseKeyAttributes {
    const NAME: &'static str = "LicenseKey";
    const TYPE: &'static str = "license-keys";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::LicenseKey(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::LicenseKeys
    }
}

/// A license key.
pub type LicenseKey = ResourceObject<LicenseKeyAttributes>;
