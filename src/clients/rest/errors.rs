//! Error type for Lemon Squeezy API calls.
//!
//! [`RestError`] is what every API call returns on failure. It separates
//! failures to talk to the server from the server saying no, and both from
//! replies that make no sense.
//!
//! # Example
//!
//! ```rust,ignore
//! use lemon_squeezy::clients::RestError;
//! use lemon_squeezy::rest::resources::Order;
//!
//! match Order::find(&client, "42", None).await {
//!     Ok(order) => println!("Order {}", order.identifier),
//!     Err(RestError::Api(e)) if e.is_not_found() => println!("No such order"),
//!     Err(RestError::Api(e)) => println!("API error: {e}"),
//!     Err(RestError::Http(e)) => println!("Transport error: {e}"),
//!     Err(RestError::Unknown { body, .. }) => println!("Unexpected reply: {body:?}"),
//!     Err(RestError::Serialization(e)) => println!("Bad request body: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use crate::rest::ApiError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// No variant is retried or recovered from internally.
#[derive(Debug, Error)]
pub enum RestError {
    /// The request was invalid or the network exchange failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server answered with a recognised error payload.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response was neither the expected document nor an error payload.
    #[error("Unrecognized response from the Lemon Squeezy API: {reason}")]
    Unknown {
        /// The body as text, or `None` if it was not UTF-8.
        body: Option<String>,
        /// Why decoding into the expected type failed.
        reason: String,
    },

    /// The write body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InvalidHttpRequestError;
    use crate::rest::{ErrorDetail, ErrorSchema};

    #[test]
    fn test_unknown_error_message_includes_reason() {
        let error = RestError::Unknown {
            body: Some("<html></html>".to_string()),
            reason: "expected value at line 1 column 1".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("Unrecognized response"));
        assert!(message.contains("line 1 column 1"));
    }

    #[test]
    fn test_api_error_is_transparent() {
        let error: RestError = ApiError {
            errors: vec![ErrorDetail {
                title: "Not Found".to_string(),
                detail: None,
                status: Some("404".to_string()),
            }],
            error: None,
            schema: ErrorSchema::Current,
        }
        .into();

        assert!(matches!(error, RestError::Api(_)));
        assert_eq!(error.to_string(), "Lemon Squeezy API error: Not Found");
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error = HttpError::InvalidRequest(InvalidHttpRequestError::BodyNotAllowed {
            method: "GET".to_string(),
        });

        let rest_error: RestError = http_error.into();

        assert!(matches!(rest_error, RestError::Http(_)));
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let unknown: &dyn std::error::Error = &RestError::Unknown {
            body: None,
            reason: String::new(),
        };
        let _ = unknown;

        let serde_error = serde_json::from_str::<u8>("x").unwrap_err();
        let serialization: &dyn std::error::Error = &RestError::Serialization(serde_error);
        assert!(serialization.source().is_some());
    }
}
