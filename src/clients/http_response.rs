//! HTTP response types for the Lemon Squeezy API client.
//!
//! This module provides the [`HttpResponse`] type. The body is kept as raw
//! bytes; interpreting it is the decoder's job, not the transport's.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-Ratelimit-*` headers.
///
/// # Example
///
/// ```rust
/// use lemon_squeezy::clients::RateLimit;
///
/// let limit = RateLimit::parse("300", "287").unwrap();
/// assert_eq!(limit.limit, 300);
/// assert_eq!(limit.remaining, 287);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed per window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
}

impl RateLimit {
    /// Parses the limit and remaining header values.
    ///
    /// Returns `None` if either value is not an unsigned integer.
    #[must_use]
    pub fn parse(limit: &str, remaining: &str) -> Option<Self> {
        Some(Self {
            limit: limit.trim().parse().ok()?,
            remaining: remaining.trim().parse().ok()?,
        })
    }
}

/// An HTTP response from the Lemon Squeezy API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-case name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
    /// Rate limit information, when the server sent it.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing rate limit headers if present.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        let first = |name: &str| headers.get(name).and_then(|values| values.first());
        let rate_limit = match (first("x-ratelimit-limit"), first("x-ratelimit-remaining")) {
            (Some(limit), Some(remaining)) => RateLimit::parse(limit, remaining),
            _ => None,
        };

        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the body as text if it is valid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}
