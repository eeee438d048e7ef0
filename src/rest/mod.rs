//! REST resource infrastructure for the Lemon Squeezy API.
//!
//! This module provides the pieces every API call is assembled from:
//!
//! - **[`Endpoint`]**: The closed set of routes, resolved to paths
//! - **[`QueryParams`] and [`Pagination`]**: Query composition
//! - **[`ResourceObject<A>`] and [`RestResource`]**: Typed JSON:API resources
//! - **[`Data`], [`DataWithMeta`], [`MetaOnly`]**: Response envelopes
//! - **[`IncludedResource`]**: Polymorphic decoding of `included` arrays
//! - **[`ApiError`]**: Server error payloads, in both known schemas
//!
//! # Overview
//!
//! Individual resources (Order, Subscription, etc.) are implemented in the
//! `resources` submodule.
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use lemon_squeezy::{ApiKey, LemonSqueezyConfig, RestClient};
//! use lemon_squeezy::rest::{IncludedResource, Pagination, QueryParams};
//! use lemon_squeezy::rest::resources::{Order, Subscription};
//!
//! let config = LemonSqueezyConfig::builder()
//!     .api_key(ApiKey::new("your-api-key")?)
//!     .build()?;
//! let client = RestClient::new(&config);
//!
//! // Find a single order, with its store side-loaded
//! let query = QueryParams::new().include(&["store"]);
//! let order = Order::find(&client, "42", Some(query)).await?;
//! println!("Order: {}", order.identifier); // Deref to the resource attributes
//!
//! for resource in order.included() {
//!     if let IncludedResource::Store(store) = resource {
//!         println!("Sold by {}", store.name);
//!     }
//! }
//!
//! // List subscriptions, 25 per page
//! let page = Subscription::all(&client, Some(Pagination::page(1).with_size(25)), None).await?;
//! for subscription in page.iter() {
//!     println!("- {} ({})", subscription.product_name, subscription.status);
//! }
//!
//! if let Some(next) = page.next_page() {
//!     let _more = Subscription::all(&client, Some(next), None).await?;
//! }
//! ```
//!
//! # Key Types
//!
//! - [`ResolvedRoute`]: A path plus the query items the route itself carries
//! - [`compose_url`]: Builds the final request URL
//! - [`decode_response`]: The three-way response decoder
//! - [`CorruptDataError`]: An `included` entry no known resource matches
//! - [`resources`]: Resource implementations (e.g., Order, Subscription)

mod errors;
mod included;
mod path;
mod query;
mod resource;
mod response;
pub mod resources;

pub use errors::{ApiError, CorruptDataError, ErrorDetail, ErrorSchema};
pub use included::IncludedResource;
pub use path::{Endpoint, ResolvedRoute, API_PREFIX};
pub use query::{compose_url, Pagination, QueryParams, DEFAULT_PAGE_SIZE};
pub use resource::{json_api_body, ResourceObject, RestResource, WriteBody};
pub use response::{decode_response, Data, DataWithMeta, Meta, MetaOnly, Page, PageLinks};
