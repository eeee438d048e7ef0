//! HTTP client for Lemon Squeezy API communication.
//!
//! This module provides the [`HttpClient`] type, which signs requests with
//! the API key and JSON:API media types and performs exactly one network
//! exchange per request.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiHost, LemonSqueezyConfig};

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The JSON:API media type used for both `Accept` and `Content-Type`.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// HTTP client for making requests to the Lemon Squeezy API.
///
/// The client handles:
/// - Bearer authentication with the configured API key
/// - JSON:API `Accept` and `Content-Type` headers
/// - User-Agent construction
/// - Response header collection
///
/// It never retries and never inspects the status code.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use lemon_squeezy::clients::{HttpClient, HttpMethod, HttpRequest};
/// use lemon_squeezy::{ApiKey, LemonSqueezyConfig};
///
/// let config = LemonSqueezyConfig::builder()
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// let url = reqwest::Url::parse("https://api.lemonsqueezy.com/v1/users/me").unwrap();
/// let request = HttpRequest::builder(HttpMethod::Get, url).build().unwrap();
///
/// let response = client.execute(request).await?;
/// ```
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The host every request is sent to.
    api_host: ApiHost,
    /// Headers attached to every request.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &LemonSqueezyConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Lemon Squeezy Rust Client v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.api_key().as_ref()),
        );
        default_headers.insert("Accept".to_string(), JSON_API_MEDIA_TYPE.to_string());
        default_headers.insert("Content-Type".to_string(), JSON_API_MEDIA_TYPE.to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            api_host: config.api_host().clone(),
            default_headers,
        }
    }

    /// Returns the API host this client talks to.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns the base URL for this client (e.g., `https://api.lemonsqueezy.com`).
    #[must_use]
    pub fn base_url(&self) -> String {
        self.api_host.base_url()
    }

    /// Returns the headers attached to every request.
    ///
    /// Includes the `Authorization` header; do not log the result.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds a signed reqwest request for the given [`HttpRequest`].
    ///
    /// Sets the method, the authorization and media type headers, and
    /// attaches the body bytes unchanged.
    #[must_use]
    pub fn sign(&self, request: &HttpRequest) -> reqwest::RequestBuilder {
        let mut req_builder = self
            .client
            .request(request.http_method.into(), request.url.clone());

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        req_builder
    }

    /// Sends a request to the Lemon Squeezy API.
    ///
    /// Any status code is a successful exchange at this layer.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network, TLS or timeout error occurs (`Network`)
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        tracing::debug!(
            method = %request.http_method,
            path = request.url.path(),
            "Sending request to Lemon Squeezy API"
        );

        let res = self.sign(&request).send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        tracing::debug!(
            method = %request.http_method,
            path = request.url.path(),
            status = code,
            "Received response from Lemon Squeezy API"
        );

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: HashMap<&str, &str> = self
            .default_headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case("authorization") {
                    (key.as_str(), "Bearer *****")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("HttpClient")
            .field("base_url", &self.api_host.base_url())
            .field("default_headers", &headers)
            .finish_non_exhaustive()
    }
}
