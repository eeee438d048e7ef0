//! REST client implementation for the Lemon Squeezy API.
//!
//! This module provides the [`RestClient`] type. Each call resolves an
//! [`Endpoint`], composes the URL, signs and sends one request, and decodes
//! the body into the caller's type.

use serde::de::DeserializeOwned;

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiHost, LemonSqueezyConfig};
use crate::error::ConfigError;
use crate::rest::{compose_url, decode_response, Endpoint, Pagination, QueryParams, WriteBody};

/// REST API client for the Lemon Squeezy API.
///
/// Provides a generic [`call`](Self::call) plus `get`, `post`, `patch` and
/// `delete` shorthands. Resource types build on these; most code uses
/// `Order::find` and friends rather than calling the client directly.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
/// It holds only immutable configuration and a connection pool.
///
/// Use [`send`](Self::send) instead of [`call`](Self::call) when the
/// response headers or rate limit are needed.
///
/// # Example
///
/// ```rust,ignore
/// use lemon_squeezy::{ApiKey, LemonSqueezyConfig, RestClient};
/// use lemon_squeezy::rest::resources::Order;
///
/// let config = LemonSqueezyConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = RestClient::new(&config);
/// let order = Order::find(&client, "42", None).await?;
/// println!("Order {} total {}", order.id, order.total_formatted);
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created, see
    /// [`HttpClient::new`].
    #[must_use]
    pub fn new(config: &LemonSqueezyConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Creates a new REST client configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the environment does not hold a valid
    /// configuration. See [`LemonSqueezyConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(&LemonSqueezyConfig::from_env()?))
    }

    /// Returns the API host this client talks to.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        self.http_client.api_host()
    }

    /// Performs one API call and decodes the response.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The route to call
    /// * `method` - The HTTP method
    /// * `query` - Caller query items, sent after pagination
    /// * `pagination` - Optional page selection
    /// * `body` - Optional write body, serialized as-is
    ///
    /// # Errors
    ///
    /// - [`RestError::Serialization`] if the body cannot be encoded
    /// - [`RestError::Http`] for invalid requests and transport failures
    /// - [`RestError::Api`] if the server answered with an error payload
    /// - [`RestError::Unknown`] if the body is neither a `T` nor an error
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        method: HttpMethod,
        query: Option<&QueryParams>,
        pagination: Option<&Pagination>,
        body: Option<&WriteBody>,
    ) -> Result<T, RestError> {
        let response = self
            .send(endpoint, method, query, pagination, body)
            .await?;
        decode_response(&response.body)
    }

    /// Performs one API call and returns the raw response.
    ///
    /// The body is not decoded; pass it to [`decode_response`] when needed.
    /// Status, headers and [`RateLimit`](crate::clients::RateLimit) are kept.
    ///
    /// # Errors
    ///
    /// - [`RestError::Serialization`] if the body cannot be encoded
    /// - [`RestError::Http`] for invalid requests and transport failures
    pub async fn send(
        &self,
        endpoint: &Endpoint,
        method: HttpMethod,
        query: Option<&QueryParams>,
        pagination: Option<&Pagination>,
        body: Option<&WriteBody>,
    ) -> Result<HttpResponse, RestError> {
        let route = endpoint.resolve();
        let empty = QueryParams::new();
        let url = compose_url(self.api_host(), &route, query.unwrap_or(&empty), pagination)
            .map_err(HttpError::from)?;

        let mut builder = HttpRequest::builder(method, url);
        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(RestError::Serialization)?;
            builder = builder.body(bytes);
        }
        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        Ok(self.http_client.execute(request).await?)
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        query: Option<&QueryParams>,
        pagination: Option<&Pagination>,
    ) -> Result<T, RestError> {
        self.call(endpoint, HttpMethod::Get, query, pagination, None)
            .await
    }

    /// Sends a POST request.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        query: Option<&QueryParams>,
        body: Option<&WriteBody>,
    ) -> Result<T, RestError> {
        self.call(endpoint, HttpMethod::Post, query, None, body)
            .await
    }

    /// Sends a PATCH request.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn patch<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        body: &WriteBody,
    ) -> Result<T, RestError> {
        self.call(endpoint, HttpMethod::Patch, None, None, Some(body))
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, RestError> {
        self.call(endpoint, HttpMethod::Delete, None, None, None)
            .await
    }
}
