//! Response envelopes and the response decoder.
//!
//! Lemon Squeezy wraps every payload in a JSON:API document. This module
//! provides the generic envelopes and [`decode_response`], which turns raw
//! bytes into one of them, a structured [`ApiError`], or an unknown-response
//! error.
//!
//! # Envelopes
//!
//! - [`Data<R>`]: `{ data, included?, errors? }`
//! - [`DataWithMeta<R>`]: adds `meta` (pagination) and top-level `links`
//! - [`MetaOnly<M>`]: `{ meta, errors? }` for endpoints with no primary data
//!
//! Decoding the envelope is the only success criterion. An `errors` key
//! next to valid `data` does not turn a response into a failure; callers
//! inspect [`Data::errors`] themselves.
//!
//! # Deref Pattern
//!
//! `Data<R>` and `DataWithMeta<R>` implement `Deref<Target = R>`:
//!
//! ```rust,ignore
//! let orders = Order::all(&client, None, None).await?;
//!
//! for order in orders.iter() {
//!     println!("{} {}", order.id, order.total_formatted);
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::RestError;
use crate::rest::errors::{ApiError, ErrorDetail};
use crate::rest::included::{deserialize_included, IncludedResource};
use crate::rest::query::Pagination;

/// A document with primary data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Data<R> {
    /// The primary data.
    pub data: R,
    /// Related resources requested through `include`.
    #[serde(
        default,
        deserialize_with = "deserialize_included",
        skip_serializing_if = "Option::is_none"
    )]
    pub included: Option<Vec<IncludedResource>>,
    /// Errors reported alongside the data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDetail>>,
}

impl<R> Data<R> {
    /// Consumes the envelope and returns the primary data.
    pub fn into_inner(self) -> R {
        self.data
    }

    /// Returns the included resources, or an empty slice.
    #[must_use]
    pub fn included(&self) -> &[IncludedResource] {
        self.included.as_deref().unwrap_or_default()
    }
}

impl<R> Deref for Data<R> {
    type Target = R;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<R> DerefMut for Data<R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

/// A document with primary data and pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataWithMeta<R> {
    /// The primary data.
    pub data: R,
    /// Related resources requested through `include`.
    #[serde(
        default,
        deserialize_with = "deserialize_included",
        skip_serializing_if = "Option::is_none"
    )]
    pub included: Option<Vec<IncludedResource>>,
    /// Errors reported alongside the data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDetail>>,
    /// Pagination metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Links to neighbouring pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<PageLinks>,
}

impl<R> DataWithMeta<R> {
    /// Consumes the envelope and returns the primary data.
    pub fn into_inner(self) -> R {
        self.data
    }

    /// Returns the included resources, or an empty slice.
    #[must_use]
    pub fn included(&self) -> &[IncludedResource] {
        self.included.as_deref().unwrap_or_default()
    }

    /// Returns the page metadata, if the server sent it.
    #[must_use]
    pub fn page(&self) -> Option<&Page> {
        self.meta.as_ref().map(|meta| &meta.page)
    }

    /// Returns `true` if there is a page after this one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.page()
            .is_some_and(|page| page.current_page < page.last_page)
    }

    /// Returns `true` if there is a page before this one.
    #[must_use]
    pub fn has_prev_page(&self) -> bool {
        self.page().is_some_and(|page| page.current_page > 1)
    }

    /// Returns the pagination for the following page with the same page size.
    #[must_use]
    pub fn next_page(&self) -> Option<Pagination> {
        if !self.has_next_page() {
            return None;
        }
        self.page()
            .map(|page| Pagination::page(page.current_page + 1).with_size(page.per_page))
    }
}

impl<R> Deref for DataWithMeta<R> {
    type Target = R;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<R> DerefMut for DataWithMeta<R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

/// A document with metadata and no primary data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaOnly<M> {
    /// The metadata.
    pub meta: M,
    /// Errors reported alongside the metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDetail>>,
}

/// List metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Page position and totals.
    pub page: Page,
}

/// Page position and totals. Keys are camelCase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// The page returned, 1-based.
    pub current_page: u32,
    /// Position of the first item on this page; `null` for an empty page.
    pub from: Option<u64>,
    /// The last available page.
    pub last_page: u32,
    /// Page size used.
    pub per_page: u32,
    /// Position of the last item on this page; `null` for an empty page.
    pub to: Option<u64>,
    /// Total number of items.
    pub total: u64,
}

/// Top-level pagination links of a list document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    /// First page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    /// Last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    /// Next page, absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Previous page, absent on the first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

/// Decodes a response body.
///
/// Tries, in order:
///
/// 1. the expected type `T`, whatever else the document contains
/// 2. an [`ApiError`] in either wire shape
/// 3. nothing: the body is returned as text in [`RestError::Unknown`]
///
/// The HTTP status code plays no part.
///
/// # Errors
///
/// Returns [`RestError::Api`] for a recognised error payload and
/// [`RestError::Unknown`] for anything else that is not a `T`.
///
/// # Example
///
/// ```rust
/// use lemon_squeezy::clients::RestError;
/// use lemon_squeezy::rest::decode_response;
/// use serde_json::Value;
///
/// let result = decode_response::<Value>(b"{\"data\":null}");
/// assert!(result.is_ok());
///
/// let result = decode_response::<Vec<u8>>(b"<html>Bad Gateway</html>");
/// assert!(matches!(
///     result,
///     Err(RestError::Unknown { body: Some(body), .. }) if body == "<html>Bad Gateway</html>"
/// ));
/// ```
pub fn decode_response<T: DeserializeOwned>(body: &[u8]) -> Result<T, RestError> {
    let decode_error = match serde_json::from_slice::<T>(body) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    if let Some(api_error) = ApiError::from_slice(body) {
        tracing::debug!(
            schema = ?api_error.schema,
            "Response decoded as an API error"
        );
        return Err(RestError::Api(api_error));
    }

    tracing::debug!(
        error = %decode_error,
        body_len = body.len(),
        "Response matched neither the expected type nor an API error"
    );

    Err(RestError::Unknown {
        body: String::from_utf8(body.to_vec()).ok(),
        reason: decode_error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::errors::ErrorSchema;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: String,
    }

    #[test]
    fn test_data_with_sibling_errors_still_decodes() {
        let body = json!({
            "data": {"id": "1"},
            "errors": [{"title": "Partial", "detail": "something minor"}]
        });
        let decoded: Data<Thing> =
            decode_response(&serde_json::to_vec(&body).unwrap()).unwrap();

        assert_eq!(decoded.id, "1");
        assert_eq!(decoded.errors.as_ref().unwrap()[0].title, "Partial");
        assert!(decoded.included().is_empty());
    }

    #[test]
    fn test_garbage_body_becomes_unknown_with_text() {
        let result = decode_response::<Data<Thing>>(b"not json at all");

        match result {
            Err(RestError::Unknown { body, reason }) => {
                assert_eq!(body.as_deref(), Some("not json at all"));
                assert!(!reason.is_empty());
            }
            other => panic!("Expected Unknown, got: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_body_becomes_unknown_without_text() {
        let result = decode_response::<Data<Thing>>(&[0xff, 0x00, 0xfe]);

        assert!(matches!(result, Err(RestError::Unknown { body: None, .. })));
    }

    #[test]
    fn test_error_payload_becomes_api_error() {
        let body = br#"{"errors":[{"status":"422","title":"Unprocessable Entity","detail":"The name field is required."}]}"#;
        let result = decode_response::<Data<Thing>>(body);

        match result {
            Err(RestError::Api(error)) => {
                assert_eq!(error.schema, ErrorSchema::Current);
                assert_eq!(error.status(), Some(422));
            }
            other => panic!("Expected Api error, got: {other:?}"),
        }
    }

    #[test]
    fn test_legacy_error_payload_becomes_api_error() {
        let body = br#"{"title":"Error","detail":"Something went wrong."}"#;
        let result = decode_response::<Data<Thing>>(body);

        assert!(matches!(
            result,
            Err(RestError::Api(ApiError {
                schema: ErrorSchema::Legacy,
                ..
            }))
        ));
    }

    #[test]
    fn test_list_meta_and_links() {
        let body = json!({
            "meta": {"page": {"currentPage": 2, "from": 11, "lastPage": 3, "perPage": 10, "to": 20, "total": 27}},
            "links": {"first": "https://api.lemonsqueezy.com/v1/orders?page[number]=1", "next": "https://api.lemonsqueezy.com/v1/orders?page[number]=3"},
            "data": [{"id": "11"}, {"id": "12"}]
        });
        let decoded: DataWithMeta<Vec<Thing>> =
            decode_response(&serde_json::to_vec(&body).unwrap()).unwrap();

        assert_eq!(decoded.len(), 2);
        let page = decoded.page().unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total, 27);
        assert!(decoded.has_next_page());
        assert!(decoded.has_prev_page());
        assert_eq!(decoded.next_page(), Some(Pagination::page(3).with_size(10)));
        assert!(decoded.links.as_ref().unwrap().next.is_some());
        assert!(decoded.links.as_ref().unwrap().prev.is_none());
    }

    #[test]
    fn test_empty_page_has_null_bounds() {
        let body = json!({
            "meta": {"page": {"currentPage": 1, "from": null, "lastPage": 1, "perPage": 10, "to": null, "total": 0}},
            "data": []
        });
        let decoded: DataWithMeta<Vec<Thing>> =
            decode_response(&serde_json::to_vec(&body).unwrap()).unwrap();

        let page = decoded.page().unwrap();
        assert!(page.from.is_none());
        assert!(page.to.is_none());
        assert!(!decoded.has_next_page());
        assert!(decoded.next_page().is_none());
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = Page {
            current_page: 1,
            from: Some(1),
            last_page: 1,
            per_page: 10,
            to: Some(3),
            total: 3,
        };
        let value = serde_json::to_value(page).unwrap();
        assert_eq!(value["currentPage"], 1);
        assert_eq!(value["perPage"], 10);
    }

    #[test]
    fn test_meta_only() {
        #[derive(Debug, Deserialize)]
        struct Usage {
            quantity: u32,
        }

        let decoded: MetaOnly<Usage> = decode_response(br#"{"meta":{"quantity":5}}"#).unwrap();
        assert_eq!(decoded.meta.quantity, 5);
        assert!(decoded.errors.is_none());
    }
}
