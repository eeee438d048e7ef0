//! Query string composition.
//!
//! Builds the final request URL from the configured host, a resolved route,
//! caller-supplied query items and optional pagination.
//!
//! # Ordering
//!
//! Items appear in a fixed order:
//!
//! 1. `page[size]` then `page[number]`, when a page number is requested
//! 2. caller items, in insertion order
//! 3. route-intrinsic items
//!
//! # Encoding
//!
//! Names and values are percent-encoded individually. `:`, `(`, `)`, `[`,
//! `]`, `,`, `/`, `?` and `@` stay literal so timestamps, filter
//! expressions, include lists and JSON:API bracket parameters reach the
//! server unchanged.
//!
//! Route segments are encoded separately. An ID never spans more than one
//! segment, and `.`, `..` or empty IDs are rejected.
//!
//! # Example
//!
//! ```rust
//! use lemon_squeezy::rest::{compose_url, Endpoint, Pagination, QueryParams};
//! use lemon_squeezy::ApiHost;
//!
//! let route = Endpoint::Orders.resolve();
//! let query = QueryParams::new().with("filter[user_email]", "a b@example.com");
//! let url = compose_url(
//!     &ApiHost::default(),
//!     &route,
//!     &query,
//!     Some(&Pagination::page(2).with_size(25)),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     url.as_str(),
//!     "https://api.lemonsqueezy.com/v1/orders?page[size]=25&page[number]=2&filter[user_email]=a%20b@example.com"
//! );
//! ```

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Url;

use crate::clients::InvalidHttpRequestError;
use crate::config::ApiHost;
use crate::rest::path::{ResolvedRoute, API_PREFIX};

/// Default page size sent with a page number.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Characters escaped in query names and values.
///
/// RFC 3986 unreserved characters pass through, as do `:`, `(`, `)`, `[`,
/// `]`, `,`, `/`, `?` and `@`.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'*')
    .add(b'+')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Characters escaped in a single path segment.
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// An ordered list of query items.
///
/// Duplicate names are allowed and insertion order is preserved.
///
/// # Example
///
/// ```rust
/// use lemon_squeezy::rest::QueryParams;
///
/// let query = QueryParams::new()
///     .with("include", "store,customer")
///     .with("filter[store_id]", "11");
///
/// let names: Vec<&str> = query.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["include", "filter[store_id]"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Creates an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends an item and returns the query.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Appends an item.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Requests related resources through the JSON:API `include` parameter.
    #[must_use]
    pub fn include(self, relationships: &[&str]) -> Self {
        self.with("include", relationships.join(","))
    }

    /// Adds a `filter[<field>]` item.
    #[must_use]
    pub fn filter(self, field: &str, value: impl Into<String>) -> Self {
        self.with(format!("filter[{field}]"), value)
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Page-based pagination for list endpoints.
///
/// Parameters are only sent when a page number is set. A `Pagination`
/// with no page number leaves paging entirely to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// The 1-based page to fetch.
    pub page_number: Option<u32>,
    /// Items per page.
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_number: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Requests the given page with the default page size.
    #[must_use]
    pub const fn page(number: u32) -> Self {
        Self {
            page_number: Some(number),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }
}

fn encode(component: &str) -> String {
    utf8_percent_encode(component, QUERY_ENCODE_SET).to_string()
}

fn encode_path(segments: &[String]) -> Result<String, InvalidHttpRequestError> {
    let mut path = API_PREFIX.to_string();
    for segment in segments {
        if matches!(segment.as_str(), "" | "." | "..") {
            return Err(InvalidHttpRequestError::InvalidPathSegment {
                segment: segment.clone(),
            });
        }
        path.push('/');
        path.extend(utf8_percent_encode(segment, SEGMENT_ENCODE_SET));
    }
    Ok(path)
}

/// Builds the absolute request URL.
///
/// Each route segment is percent-encoded on its own, so `/`, `?` and `#`
/// inside an ID cannot change the path, query or fragment.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::InvalidPathSegment`] if a segment is
/// empty, `.` or `..`.
///
/// # Panics
///
/// Panics if the host does not form a valid URL. [`ApiHost`] is validated
/// at construction, so this indicates a bug rather than bad input.
pub fn compose_url(
    host: &ApiHost,
    route: &ResolvedRoute,
    caller: &QueryParams,
    pagination: Option<&Pagination>,
) -> Result<Url, InvalidHttpRequestError> {
    let path = encode_path(&route.segments)?;
    let mut items: Vec<(String, String)> = Vec::new();

    if let Some(Pagination {
        page_number: Some(number),
        page_size,
    }) = pagination
    {
        items.push(("page[size]".to_string(), page_size.to_string()));
        items.push(("page[number]".to_string(), number.to_string()));
    }

    items.extend(caller.iter().map(|(n, v)| (n.to_string(), v.to_string())));
    items.extend(route.query.iter().map(|(n, v)| (n.to_string(), v.to_string())));

    let mut url = Url::parse(&host.base_url()).expect("API host forms a valid URL");
    url.set_path(&path);

    if !items.is_empty() {
        let query = items
            .iter()
            .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        url.set_query(Some(&query));
    }

    Ok(url)
}
