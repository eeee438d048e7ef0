//! Order item resource implementation.

use serde::{Deserialize, Serialize};

use crate::rest::{Endpoint, ResourceObject, RestResource};

/// Attributes of an order line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemAttributes {
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

impl RestResource for OrderItemAttributes {
    const NAME: &'static str = "OrderItem";
    const TYPE: &'static str = "order-items";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::OrderItem(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::OrderItems
    }
}

/// An order line item.
pub type OrderItem = ResourceObject<OrderItemAttributes>;
