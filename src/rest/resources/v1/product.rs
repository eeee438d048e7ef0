//! Product resource implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use lemon_squeezy::rest::{Pagination, QueryParams};
//! use lemon_squeezy::rest::resources::Product;
//!
//! let query = QueryParams::new().filter("store_id", "1");
//! let products = Product::all(&client, Some(Pagination::page(1)), Some(query)).await?;
//! for product in products.iter() {
//!     println!("{}: {}", product.name, product.price_formatted);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::rest::{Endpoint, ResourceObject, RestResource};

/// Attributes of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAttributes {
    pub store_id: u64,
    pub name: String,
    pub slug: String,
    /// Description as HTML.
    pub description: Option<String>,
    /// `published` or `draft`.
    pub status: String,
    pub status_formatted: String,
    pub thumb_url: Option<String>,
    pub large_thumb_url: Option<String>,
    /// Price in cents. Zero when the product has variants with their own price.
    pub price: i64,
    pub pay_what_you_want: bool,
    /// Lowest variant price in cents, for products with multiple variants.
    pub from_price: Option<i64>,
    /// Highest variant price in cents, for products with multiple variants.
    pub to_price: Option<i64>,
    /// A URL to purchase the product with the default checkout.
    pub buy_now_url: String,
    pub price_formatted: String,
    pub created_at: String,
    pub updated_at: String,
}

impl RestResource for ProductAttributes {
    const NAME: &'static str = "Product";
    const TYPE: &'static str = "products";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::Product(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::Products
    }
}

/// A product.
pub type Product = ResourceObject<ProductAttributes>;
