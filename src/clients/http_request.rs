//! HTTP request types for the Lemon Squeezy API client.
//!
//! This module provides the [`HttpRequest`] type and its builder. A request
//! carries a fully composed URL (path and query already encoded) and an
//! optional body that was serialized before it got here.

use std::fmt;

use reqwest::Url;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the Lemon Squeezy API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and license calls.
    Post,
    /// HTTP PUT method.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing or cancelling resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case wire name of the method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` for methods that may carry a request body.
    #[must_use]
    pub const fn allows_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// An HTTP request to be sent to the Lemon Squeezy API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use lemon_squeezy::clients::{HttpMethod, HttpRequest};
/// use reqwest::Url;
///
/// let url = Url::parse("https://api.lemonsqueezy.com/v1/subscriptions/1").unwrap();
///
/// let request = HttpRequest::builder(HttpMethod::Patch, url)
///     .body(br#"{"data":{"type":"subscriptions","id":"1"}}"#.to_vec())
///     .build()
///     .unwrap();
///
/// assert_eq!(request.http_method, HttpMethod::Patch);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL, query included.
    pub url: Url,
    /// The serialized request body, if any. Sent verbatim.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method for the request
    /// * `url` - The absolute request URL
    #[must_use]
    pub fn builder(method: HttpMethod, url: Url) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::BodyNotAllowed`] if a body is
    /// attached to a `GET` or `DELETE` request.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && !self.http_method.allows_body() {
            return Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: Url,
    body: Option<Vec<u8>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            http_method: method,
            url,
            body: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}
