//! Order resource implementation.
//!
//! Orders are created when a customer completes a checkout. They are
//! read-only through the API.
//!
//! # Example
//!
//! ```rust,ignore
//! use lemon_squeezy::rest::{IncludedResource, QueryParams};
//! use lemon_squeezy::rest::resources::Order;
//!
//! let query = QueryParams::new().include(&["order-items", "customer"]);
//! let order = Order::find(&client, "42", Some(query)).await?;
//! println!("#{} {} ({})", order.order_number, order.total_formatted, order.status);
//!
//! for resource in order.included() {
//!     if let IncludedResource::OrderItem(item) = resource {
//!         println!("- {} / {}", item.product_name, item.variant_name);
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::rest::{Endpoint, ResourceObject, RestResource};

/// Attributes of an order.
///
/// Monetary amounts are integers in the smallest unit of the order currency
/// (`subtotal`, `total`, ...) or in US cents (`*_usd`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAttributes {
    pub store_id: u64,
    pub customer_id: Option<u64>,
    /// Unique UUID for the order.
    pub identifier: String,
    /// Sequential order number within the store.
    pub order_number: u64,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Exchange rate between `currency` and USD, as a decimal string.
    pub currency_rate: String,
    pub subtotal: i64,
    pub discount_total: i64,
    pub tax: i64,
    pub total: i64,
    pub subtotal_usd: i64,
    pub discount_total_usd: i64,
    pub tax_usd: i64,
    pub total_usd: i64,
    pub tax_name: Option<String>,
    /// Tax rate as a decimal string, e.g. `"20.00"`.
    pub tax_rate: String,
    /// `pending`, `failed`, `paid`, `refunded`, `partial_refund` or `fraudulent`.
    pub status: String,
    pub status_formatted: String,
    pub refunded: bool,
    pub refunded_at: Option<String>,
    pub subtotal_formatted: String,
    pub discount_total_formatted: String,
    pub tax_formatted: String,
    pub total_formatted: String,
    /// The first line item, when the server sends it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_order_item: Option<FirstOrderItem>,
    pub urls: OrderUrls,
    pub created_at: String,
    pub updated_at: String,
}

/// Links attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUrls {
    /// The customer-facing receipt.
    pub receipt: String,
}

/// The first item of an order, embedded in the order attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstOrderItem {
    pub order_id: u64,
    pub product_id: u64,
    pub variant_id: u64,
    pub product_name: String,
    pub variant_name: String,
    /// Price in cents.
    pub price: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl RestResource for OrderAttributes {
    const NAME: &'static str = "Order";
    const TYPE: &'static str = "orders";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::Order(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::Orders
    }
}

/// An order.
pub type Order = ResourceObject<OrderAttributes>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_attributes() -> serde_json::Value {
        json!({
            "store_id": 1,
            "customer_id": 1,
            "identifier": "104e18a2-d755-4d4b-80c4-a6c1dcbe1c10",
            "order_number": 1,
            "user_name": "Darlene Daugherty",
            "user_email": "gernser@yahoo.com",
            "currency": "USD",
            "currency_rate": "1.0000",
            "subtotal": 999,
            "discount_total": 0,
            "tax": 200,
            "total": 1199,
            "subtotal_usd": 999,
            "discount_total_usd": 0,
            "tax_usd": 200,
            "total_usd": 1199,
            "tax_name": "VAT",
            "tax_rate": "20.00",
            "status": "paid",
            "status_formatted": "Paid",
            "refunded": false,
            "refunded_at": null,
            "subtotal_formatted": "$9.99",
            "discount_total_formatted": "$0.00",
            "tax_formatted": "$2.00",
            "total_formatted": "$11.99",
            "urls": {
                "receipt": "https://app.lemonsqueezy.com/my-orders/104e18a2-d755-4d4b-80c4-a6c1dcbe1c10"
            },
            "created_at": "2021-08-17T09:45:53.000000Z",
            "updated_at": "2021-08-17T09:45:53.000000Z"
        })
    }

    #[test]
    fn test_order_without_first_item_round_trips() {
        let value = json!({"type": "orders", "id": "1", "attributes": order_attributes()});

        let order: Order = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(order.total, 1199);
        assert!(order.first_order_item.is_none());
        assert_eq!(serde_json::to_value(&order).unwrap(), value);
    }

    #[test]
    fn test_order_with_first_item() {
        let mut attributes = order_attributes();
        attributes["first_order_item"] = json!({
            "order_id": 1,
            "product_id": 1,
            "variant_id": 1,
            "product_name": "Test Limited License for 2 years",
            "variant_name": "Default",
            "price": 1199,
            "created_at": "2021-08-17T09:45:53.000000Z",
            "updated_at": "2021-08-17T09:45:53.000000Z"
        });

        let order: Order =
            serde_json::from_value(json!({"type": "orders", "id": "1", "attributes": attributes}))
                .unwrap();

        let item = order.first_order_item.as_ref().unwrap();
        assert_eq!(item.variant_name, "Default");
        assert_eq!(item.price, 1199);
    }
}
