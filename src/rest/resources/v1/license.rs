//! License API: activate, validate and deactivate license keys.
//!
//! These endpoints are meant to be called from the licensed application.
//! They take their arguments as query parameters and answer with plain
//! JSON rather than JSON:API documents.
//!
//! # Example
//!
//! ```rust,ignore
//! let activation = client.activate_license("38b1460a-5104-4067-a91d-77b872934d51", "Test").await?;
//! if activation.activated {
//!     let instance_id = activation.instance.id.clone();
//!     let check = client.validate_license(&activation.license_key.key, Some(&instance_id)).await?;
//!     assert!(check.valid);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{RestClient, RestError};
use crate::rest::{Endpoint, QueryParams};

/// The license key as reported by the license API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseKeyDetails {
    pub id: u64,
    /// `inactive`, `active`, `expired` or `disabled`.
    pub status: String,
    /// The full license key.
    pub key: String,
    pub activation_limit: Option<i64>,
    pub activation_usage: i64,
    pub created_at: String,
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_mode: Option<bool>,
}

/// One activation of a license key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseInstance {
    /// Pass this as `instance_id` when validating or deactivating.
    pub id: String,
    pub name: String,
    pub created_at: String,
}

/// Store, order and customer the license key belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseMeta {
    pub store_id: u64,
    pub order_id: u64,
    pub order_item_id: u64,
    pub product_id: u64,
    pub product_name: String,
    pub variant_id: u64,
    pub variant_name: String,
    pub customer_id: u64,
    pub customer_name: String,
    pub customer_email: String,
}

/// Result of [`RestClient::activate_license`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivateLicense {
    pub activated: bool,
    /// Why activation failed, when it did.
    pub error: Option<String>,
    pub license_key: LicenseKeyDetails,
    pub instance: LicenseInstance,
    pub meta: LicenseMeta,
}

/// Result of [`RestClient::validate_license`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateLicense {
    pub valid: bool,
    pub error: Option<String>,
    pub license_key: LicenseKeyDetails,
    /// The instance, when one was named in the request.
    pub instance: Option<LicenseInstance>,
    pub meta: LicenseMeta,
}

/// Result of [`RestClient::deactivate_license`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeactivateLicense {
    pub deactivated: bool,
    pub error: Option<String>,
    pub license_key: LicenseKeyDetails,
    pub meta: LicenseMeta,
}

impl RestClient {
    /// Activates a license key, creating a named instance.
    ///
    /// # Arguments
    ///
    /// * `license_key` - The key to activate
    /// * `instance_name` - A label for the new instance, e.g. a machine name
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the response matches
    /// neither the activation shape nor an error payload.
    pub async fn activate_license(
        &self,
        license_key: &str,
        instance_name: &str,
    ) -> Result<ActivateLicense, RestError> {
        let query = QueryParams::new()
            .with("license_key", license_key)
            .with("instance_name", instance_name);
        self.post(&Endpoint::ActivateLicense, Some(&query), None)
            .await
    }

    /// Validates a license key, optionally for one instance.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the response matches
    /// neither the validation shape nor an error payload.
    pub async fn validate_license(
        &self,
        license_key: &str,
        instance_id: Option<&str>,
    ) -> Result<ValidateLicense, RestError> {
        let mut query = QueryParams::new().with("license_key", license_key);
        if let Some(instance_id) = instance_id {
            query.push("instance_id", instance_id);
        }
        self.post(&Endpoint::ValidateLicense, Some(&query), None)
            .await
    }

    /// Deactivates one instance of a license key.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the response matches
    /// neither the deactivation shape nor an error payload.
    pub async fn deactivate_license(
        &self,
        license_key: &str,
        instance_id: &str,
    ) -> Result<DeactivateLicense, RestError> {
        let query = QueryParams::new()
            .with("license_key", license_key)
            .with("instance_id", instance_id);
        self.post(&Endpoint::DeactivateLicense, Some(&query), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_license_without_instance() {
        let json = r#"{
            "valid": true,
            "error": null,
            "license_key": {
                "id": 1,
                "status": "active",
                "key": "38b1460a-5104-4067-a91d-77b872934d51",
                "activation_limit": 1,
                "activation_usage": 5,
                "created_at": "2021-01-24T14:15:07.000000Z",
                "expires_at": null
            },
            "instance": null,
            "meta": {
                "store_id": 1,
                "order_id": 2,
                "order_item_id": 3,
                "product_id": 4,
                "product_name": "Example Product",
                "variant_id": 5,
                "variant_name": "Default",
                "customer_id": 6,
                "customer_name": "Luke Skywalker",
                "customer_email": "luke@skywalker.com"
            }
        }"#;

        let result: ValidateLicense = serde_json::from_str(json).unwrap();

        assert!(result.valid);
        assert!(result.instance.is_none());
        assert!(result.license_key.test_mode.is_none());
        assert_eq!(result.meta.customer_name, "Luke Skywalker");
    }

    #[test]
    fn test_failed_activation_still_decodes() {
        let json = r#"{
            "activated": false,
            "error": "This license key has reached the activation limit.",
            "license_key": {
                "id": 1,
                "status": "active",
                "key": "38b1460a-5104-4067-a91d-77b872934d51",
                "activation_limit": 1,
                "activation_usage": 1,
                "created_at": "2021-01-24T14:15:07.000000Z",
                "expires_at": null,
                "test_mode": true
            },
            "instance": {
                "id": "47596ad9-a811-4ebf-ac8a-03fc7b6d2a17",
                "name": "Test",
                "created_at": "2021-04-06T14:15:07.000000Z"
            },
            "meta": {
                "store_id": 1,
                "order_id": 2,
                "order_item_id": 3,
                "product_id": 4,
                "product_name": "Example Product",
                "variant_id": 5,
                "variant_name": "Default",
                "customer_id": 6,
                "customer_name": "Luke Skywalker",
                "customer_email": "luke@skywalker.com"
            }
        }"#;

        let result: ActivateLicense = serde_json::from_str(json).unwrap();

        assert!(!result.activated);
        assert!(result.error.as_deref().unwrap().contains("activation limit"));
        assert_eq!(result.license_key.test_mode, Some(true));
    }
}
