//! REST API client for the Lemon Squeezy API.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that turns routes into typed
//! values.
//!
//! # Overview
//!
//! - [`RestClient`]: The API client with `call()`, `get()`, `post()`, `patch()` and `delete()`
//! - [`RestError`]: Error type for API calls
//!
//! # Pipeline
//!
//! Each call goes through the same steps, once, with no retry:
//!
//! 1. resolve the [`Endpoint`](crate::rest::Endpoint) into a path
//! 2. compose the URL (pagination, caller query, route query)
//! 3. sign the request (bearer key, JSON:API media types)
//! 4. send it
//! 5. decode the body: expected type, else API error, else unknown
//!
//! # Example
//!
//! ```rust,ignore
//! use lemon_squeezy::{ApiKey, LemonSqueezyConfig, RestClient};
//! use lemon_squeezy::rest::{Data, Endpoint};
//! use lemon_squeezy::rest::resources::Store;
//!
//! let config = LemonSqueezyConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config);
//! let store: Data<Store> = client.get(&Endpoint::Store("1".into()), None, None).await?;
//! println!("Store: {}", store.name);
//! ```

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
