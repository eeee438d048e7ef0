//! Resource objects and the [`RestResource`] trait.
//!
//! Every Lemon Squeezy resource arrives as a JSON:API resource object:
//!
//! ```json
//! { "type": "orders", "id": "1", "attributes": { ... }, "relationships": { ... }, "links": { ... } }
//! ```
//!
//! [`ResourceObject<A>`] models that shape once; each resource only defines
//! its attributes type `A`. Attribute types implement [`RestResource`],
//! which names their routes and gives every resource `find()` and `all()`.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use lemon_squeezy::rest::{Endpoint, ResourceObject, RestResource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! pub struct OrderAttributes {
//!     pub store_id: u64,
//!     pub total: i64,
//! }
//!
//! impl RestResource for OrderAttributes {
//!     const NAME: &'static str = "Order";
//!     const TYPE: &'static str = "orders";
//!
//!     fn find_endpoint(id: String) -> Endpoint {
//!         Endpoint::Order(id)
//!     }
//!
//!     fn list_endpoint() -> Endpoint {
//!         Endpoint::Orders
//!     }
//! }
//!
//! pub type Order = ResourceObject<OrderAttributes>;
//!
//! // Usage:
//! let order = Order::find(&client, "42", None).await?;
//! let orders = Order::all(&client, Some(Pagination::page(2)), None).await?;
//! ```

use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{RestClient, RestError};
use crate::rest::path::Endpoint;
use crate::rest::query::{Pagination, QueryParams};
use crate::rest::response::{Data, DataWithMeta};

/// A caller-built JSON body for POST and PATCH requests.
///
/// Insertion order is preserved when serialized. Fields the typed models do
/// not know about yet can be sent as-is.
pub type WriteBody = Map<String, Value>;

/// A JSON:API resource object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceObject<A> {
    /// The resource ID. Empty if the server omitted it.
    #[serde(default)]
    pub id: String,
    /// The JSON:API resource type, e.g. `orders`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// The resource attributes.
    pub attributes: A,
    /// Relationship links, kept as raw JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Value>,
    /// Resource links, kept as raw JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
}

impl<A> ResourceObject<A> {
    /// Returns the `self` link, if present.
    #[must_use]
    pub fn self_link(&self) -> Option<&str> {
        self.links.as_ref()?.get("self")?.as_str()
    }
}

impl<A> Deref for ResourceObject<A> {
    type Target = A;

    fn deref(&self) -> &Self::Target {
        &self.attributes
    }
}

/// Routes and metadata for a resource's attributes type.
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// Human-readable resource name (e.g., "Order").
    const NAME: &'static str;

    /// The JSON:API `type` (e.g., "orders").
    const TYPE: &'static str;

    /// The route for a single resource.
    fn find_endpoint(id: String) -> Endpoint;

    /// The route for the collection.
    fn list_endpoint() -> Endpoint;
}

impl<A: RestResource> ResourceObject<A> {
    /// Retrieves a single resource by ID.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use
    /// * `id` - The resource ID
    /// * `query` - Optional extra query items, e.g. `include`
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the response is not a
    /// resource document.
    pub async fn find(
        client: &RestClient,
        id: impl Into<String>,
        query: Option<QueryParams>,
    ) -> Result<Data<Self>, RestError> {
        let endpoint = A::find_endpoint(id.into());
        client.get(&endpoint, query.as_ref(), None).await
    }

    /// Lists resources, one page at a time.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use
    /// * `pagination` - Page to fetch; `None` leaves paging to the server
    /// * `query` - Optional extra query items, e.g. filters
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the response is not a
    /// list document.
    pub async fn all(
        client: &RestClient,
        pagination: Option<Pagination>,
        query: Option<QueryParams>,
    ) -> Result<DataWithMeta<Vec<Self>>, RestError> {
        client
            .get(&A::list_endpoint(), query.as_ref(), pagination.as_ref())
            .await
    }
}

/// Builds a JSON:API write document: `{"data": {"type", "id"?, "attributes"}}`.
///
/// # Example
///
/// ```rust
/// use lemon_squeezy::rest::{json_api_body, WriteBody};
/// use serde_json::json;
///
/// let mut attributes = WriteBody::new();
/// attributes.insert("cancelled".to_string(), json!(false));
///
/// let body = json_api_body("subscriptions", Some("1"), attributes);
/// assert_eq!(
///     serde_json::to_string(&body).unwrap(),
///     r#"{"data":{"type":"subscriptions","id":"1","attributes":{"cancelled":false}}}"#
/// );
/// ```
#[must_use]
pub fn json_api_body(kind: &str, id: Option<&str>, attributes: WriteBody) -> WriteBody {
    let mut data = Map::new();
    data.insert("type".to_string(), Value::from(kind));
    if let Some(id) = id {
        data.insert("id".to_string(), Value::from(id));
    }
    data.insert("attributes".to_string(), Value::Object(attributes));

    let mut body = Map::new();
    body.insert("data".to_string(), Value::Object(data));
    body
}
