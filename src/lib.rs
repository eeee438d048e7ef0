//! # Lemon Squeezy API Rust Client
//!
//! A typed Rust client for the Lemon Squeezy JSON:API, covering stores,
//! products, orders, subscriptions, license keys and webhooks.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`LemonSqueezyConfig`] and [`LemonSqueezyConfigBuilder`]
//! - Validated newtypes for the API key, host and webhook secret
//! - A [`RestClient`] that resolves routes, signs requests and decodes responses
//! - Typed resources with `find()` and `all()`, plus resource-specific operations
//! - Polymorphic decoding of side-loaded (`included`) resources
//! - The license API (activate, validate, deactivate)
//! - Webhook signature verification
//!
//! ## Quick Start
//!
//! ```rust
//! use lemon_squeezy::{ApiKey, LemonSqueezyConfig};
//!
//! let config = LemonSqueezyConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_host().base_url(), "https://api.lemonsqueezy.com");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use lemon_squeezy::{LemonSqueezyConfig, RestClient};
//! use lemon_squeezy::rest::{Pagination, QueryParams};
//! use lemon_squeezy::rest::resources::{Order, Subscription, User};
//!
//! let config = LemonSqueezyConfig::from_env()?;
//! let client = RestClient::new(&config);
//!
//! let me = User::me(&client).await?;
//! println!("Authenticated as {}", me.name);
//!
//! let order = Order::find(&client, "42", Some(QueryParams::new().include(&["store"]))).await?;
//! println!("Order {} for {}", order.identifier, order.total_formatted);
//!
//! let page = Subscription::all(&client, Some(Pagination::page(1).with_size(25)), None).await?;
//! println!("{} subscriptions in total", page.page().map_or(0, |p| p.total));
//! ```
//!
//! ## License Keys
//!
//! ```rust,ignore
//! let activation = client.activate_license("38b1460a-...", "my-laptop").await?;
//! let check = client.validate_license("38b1460a-...", Some(&activation.instance.id)).await?;
//! client.deactivate_license("38b1460a-...", &activation.instance.id).await?;
//! ```
//!
//! ## Error Handling
//!
//! Every API call returns [`RestError`]: transport failures, server error
//! payloads and unrecognisable responses are separate variants. Nothing is
//! retried.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Decode, don't inspect**: Success is decided by the response shape, not the status code

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use config::{ApiHost, ApiKey, LemonSqueezyConfig, LemonSqueezyConfigBuilder, WebhookSecret};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, RateLimit, RestClient, RestError,
};

pub use rest::resources;
