//! License key instance resource implementation.
//!
//! An instance is one activation of a license key.

use serde::{Deserialize, Serialize};

use crate::rest::{Endpoint, ResourceObject, RestResource};

/// Attributes of a license key instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseKeyInstanceAttributes {
    pub license_key_id: u64,
    /// Unique UUID, used as `instance_id` by the license API.
    pub identifier: String,
    /// The name given at activation.
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl RestResource for LicenseKeyInstanceAttributes {
    const NAME: &'static str = "LicenseKeyInstance";
    const TYPE: &'static str = "license-key-instances";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::LicenseKeyInstance(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::LicenseKeyInstances
    }
}

/// A license key instance.
pub type LicenseKeyInstance = ResourceObject<LicenseKeyInstanceAttributes>;
