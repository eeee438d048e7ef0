//! Checkout resource implementation.
//!
//! Checkouts are custom, pre-filled purchase links for a variant.
//!
//! # Special Operations
//!
//! - `Checkout::create()` - Create a checkout
//!
//! # Example
//!
//! ```rust,ignore
//! use lemon_squeezy::rest::{json_api_body, WriteBody};
//! use lemon_squeezy::rest::resources::Checkout;
//! use serde_json::json;
//!
//! let mut attributes = WriteBody::new();
//! attributes.insert("custom_price".to_string(), json!(5000));
//! attributes.insert("checkout_data".to_string(), json!({"email": "buyer@example.com"}));
//!
//! let mut body = json_api_body("checkouts", None, attributes);
//! body["data"]["relationships"] = json!({
//!     "store": {"data": {"type": "stores", "id": "1"}},
//!     "variant": {"data": {"type": "variants", "id": "1"}}
//! });
//!
//! let checkout = Checkout::create(&client, &body).await?;
//! println!("Send the buyer to {}", checkout.url);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::empty_array_as_none;
use crate::clients::{RestClient, RestError};
use crate::rest::{Data, Endpoint, ResourceObject, RestResource, WriteBody};

/// Attributes of a checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutAttributes {
    pub store_id: u64,
    pub variant_id: u64,
    /// Overrides the variant price, in cents.
    pub custom_price: Option<i64>,
    pub product_options: ProductOptions,
    pub checkout_options: CheckoutOptions,
    pub checkout_data: CheckoutData,
    /// After this time the checkout URL stops working.
    pub expires_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub test_mode: bool,
    /// The shareable checkout URL.
    pub url: String,
}

/// Overrides for the product shown at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOptions {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Image URLs.
    pub media: Option<Vec<String>>,
    pub redirect_url: Option<String>,
    pub receipt_button_text: Option<String>,
    pub receipt_link_url: Option<String>,
    pub receipt_thank_you_note: Option<String>,
    /// Variant IDs offered at checkout.
    pub enabled_variants: Option<Vec<u64>>,
}

/// Display options for the checkout page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOptions {
    /// Render as an overlay embed.
    pub embed: bool,
    pub media: bool,
    pub logo: bool,
    /// Show the product description.
    pub desc: bool,
    /// Show the discount code field.
    pub discount: bool,
    pub dark: bool,
    pub subscription_preview: bool,
    /// Hex color of the checkout button.
    pub button_color: String,
}

/// Values pre-filled at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutData {
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_array_as_none")]
    pub billing_address: Option<BillingAddress>,
    pub tax_number: Option<String>,
    pub discount_code: Option<String>,
    /// Custom data passed through to the order and webhooks.
    #[serde(default, deserialize_with = "empty_array_as_none")]
    pub custom: Option<Map<String, Value>>,
}

/// A pre-filled billing address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAddress {
    pub country: Option<String>,
    pub zip: Option<String>,
}

impl RestResource for CheckoutAttributes {
    const NAME: &'static str = "Checkout";
    const TYPE: &'static str = "checkouts";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::Checkout(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::Checkouts
    }
}

/// A checkout.
pub type Checkout = ResourceObject<CheckoutAttributes>;

impl Checkout {
    /// Creates a checkout.
    ///
    /// Sends a POST to `/checkouts` with the body as given. The body must
    /// carry `store` and `variant` relationships.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the server rejects the
    /// checkout.
    pub async fn create(client: &RestClient, body: &WriteBody) -> Result<Data<Self>, RestError> {
        client.post(&Endpoint::Checkouts, None, Some(body)).await
    }
}
