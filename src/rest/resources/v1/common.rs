//! Helpers shared by several resources.

use serde::de::{self, DeserializeOwned, Deserializer, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Deserializes a flag the API sends either as a boolean or as `0`/`1`.
///
/// Any non-zero integer is `true`.
pub fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean or an integer flag")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<bool, E> {
            Ok(value != 0)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<bool, E> {
            Ok(value != 0)
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}

/// Deserializes an optional object that the API sends as `[]` when empty.
pub fn empty_array_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Array(items) if items.is_empty() => Ok(None),
        value => T::deserialize(value).map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    #[derive(Debug, Deserialize)]
    struct Flag {
        #[serde(deserialize_with = "bool_or_int")]
        disabled: bool,
    }

    #[test]
    fn test_bool_or_int_accepts_both_forms() {
        let cases = [
            (r#"{"disabled": true}"#, true),
            (r#"{"disabled": false}"#, false),
            (r#"{"disabled": 1}"#, true),
            (r#"{"disabled": 0}"#, false),
        ];

        for (json, expected) in cases {
            let flag: Flag = serde_json::from_str(json).unwrap();
            assert_eq!(flag.disabled, expected, "input: {json}");
        }
    }

    #[test]
    fn test_bool_or_int_rejects_strings() {
        assert!(serde_json::from_str::<Flag>(r#"{"disabled": "yes"}"#).is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Custom {
        #[serde(default, deserialize_with = "empty_array_as_none")]
        custom: Option<Map<String, Value>>,
    }

    #[test]
    fn test_empty_array_as_none() {
        let empty: Custom = serde_json::from_str(r#"{"custom": []}"#).unwrap();
        assert!(empty.custom.is_none());

        let null: Custom = serde_json::from_str(r#"{"custom": null}"#).unwrap();
        assert!(null.custom.is_none());

        let missing: Custom = serde_json::from_str("{}").unwrap();
        assert!(missing.custom.is_none());

        let filled: Custom = serde_json::from_str(r#"{"custom": {"user_id": 123}}"#).unwrap();
        assert_eq!(filled.custom.unwrap()["user_id"], 123);

        assert!(serde_json::from_str::<Custom>(r#"{"custom": [1]}"#).is_err());
    }
}
