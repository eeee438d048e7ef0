//! HTTP client types for Lemon Squeezy API communication.
//!
//! This module provides the transport layer: building, signing and sending
//! requests, and collecting responses.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client that signs and sends requests
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`rest::RestClient`]: Higher-level client that decodes typed responses
//! - [`rest::RestError`]: Error type for API calls
//!
//! # Retry Behavior
//!
//! There is none. Every call performs exactly one network exchange; a
//! non-2xx status is handed to the decoder like any other response.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, JSON_API_MEDIA_TYPE, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};

// Re-export REST client types at the clients module level
pub use rest::{RestClient, RestError};
