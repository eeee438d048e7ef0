//! Structured error payloads returned by the Lemon Squeezy API.
//!
//! The API has answered failures in two shapes over time:
//!
//! - **Current** (JSON:API): `{"errors": [{"title", "detail", "status"}]}`,
//!   and `{"error": "..."}` from the license endpoints
//! - **Legacy**: `{"title": "...", "detail": "...", "errors": [{"message"}]}`
//!
//! Both are normalized into [`ApiError`]; [`ApiError::schema`] records which
//! one was seen.
//!
//! This module also defines [`CorruptDataError`], raised when an embedded
//! resource object matches none of the known resource types.
//!
//! # Example
//!
//! ```rust
//! use lemon_squeezy::rest::{ApiError, ErrorSchema};
//!
//! let body = br#"{"errors":[{"status":"404","title":"Not Found","detail":"No order 9."}]}"#;
//! let error = ApiError::from_slice(body).unwrap();
//!
//! assert_eq!(error.schema, ErrorSchema::Current);
//! assert_eq!(error.status(), Some(404));
//! assert!(error.to_string().contains("No order 9."));
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Which wire shape an [`ApiError`] was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorSchema {
    /// JSON:API `errors` array or a bare `error` string.
    Current,
    /// Top-level `title`/`detail` with optional `errors[].message`.
    Legacy,
}

/// One entry of an `errors` array.
///
/// Legacy entries only carry `message`, which lands in `title`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Short summary of the problem.
    #[serde(default, alias = "message")]
    pub title: String,
    /// Longer explanation, when given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// HTTP status as sent by the server. Accepts a string or a number.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}

/// An error reported by the Lemon Squeezy API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Individual errors, in the order the server listed them.
    pub errors: Vec<ErrorDetail>,
    /// A bare error message, as the license endpoints send it.
    pub error: Option<String>,
    /// The wire shape this error was decoded from.
    pub schema: ErrorSchema,
}

#[derive(Deserialize)]
struct CurrentWire {
    #[serde(default)]
    errors: Vec<ErrorDetail>,
    #[serde(default)]
    error: Option<String>,
    // Only the legacy shape has a top-level title.
    #[serde(default)]
    title: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct LegacyWire {
    title: String,
    detail: String,
    #[serde(default)]
    errors: Option<Vec<ErrorDetail>>,
}

impl ApiError {
    /// Decodes an error payload, trying the current shape before the legacy one.
    ///
    /// Returns `None` when the bytes match neither shape. A current-shape
    /// payload only counts if it actually carries an error.
    #[must_use]
    pub fn from_slice(body: &[u8]) -> Option<Self> {
        if let Ok(wire) = serde_json::from_slice::<CurrentWire>(body) {
            if wire.title.is_none() && (!wire.errors.is_empty() || wire.error.is_some()) {
                return Some(Self {
                    errors: wire.errors,
                    error: wire.error,
                    schema: ErrorSchema::Current,
                });
            }
        }

        let wire = serde_json::from_slice::<LegacyWire>(body).ok()?;
        let mut errors = vec![ErrorDetail {
            title: wire.title,
            detail: Some(wire.detail),
            status: None,
        }];
        errors.extend(wire.errors.unwrap_or_default());

        Some(Self {
            errors,
            error: None,
            schema: ErrorSchema::Legacy,
        })
    }

    /// Returns the first status code listed, if it parses as one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.errors
            .iter()
            .find_map(|detail| detail.status.as_deref()?.parse().ok())
    }

    /// Returns `true` if any listed status is 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.errors
            .iter()
            .any(|detail| detail.status.as_deref() == Some("404"))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Lemon Squeezy API error")?;
        let mut separator = ": ";
        if let Some(error) = &self.error {
            write!(f, "{separator}{error}")?;
            separator = "; ";
        }
        for detail in &self.errors {
            write!(f, "{separator}{}", detail.title)?;
            if let Some(text) = &detail.detail {
                write!(f, " ({text})")?;
            }
            separator = "; ";
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// An embedded resource object matched none of the known resource types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorruptDataError {
    /// Position within the `included` array, when decoded from one.
    pub index: Option<usize>,
    /// The object's `type`, or empty if absent.
    pub kind: String,
    /// The object's `id`, or empty if absent.
    pub id: String,
}

impl fmt::Display for CorruptDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(index) = self.index {
            write!(f, "included[{index}]: ")?;
        }
        write!(
            f,
            "resource object (type '{}', id '{}') matches no known resource",
            self.kind, self.id
        )
    }
}

impl std::error::Error for CorruptDataError {}

impl CorruptDataError {
    /// Records the position of the object within its array.
    #[must_use]
    pub fn at_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}
