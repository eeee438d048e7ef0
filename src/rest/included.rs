//! Polymorphic decoding of related resources.
//!
//! The `included` array of a JSON:API document mixes resource types. Each
//! entry is decoded into one [`IncludedResource`] variant.
//!
//! # Strategy
//!
//! 1. Attributes nested under `attributes` are used as-is; flat objects
//!    (`{"id", "type", "name", ...}`) have their fields lifted into
//!    `attributes` first.
//! 2. The `type` member selects a decoder from a lookup table.
//! 3. If the `type` is unknown, or its decoder rejects the object, every
//!    decoder is tried in a fixed order: Store, Order, `OrderItem`,
//!    Product, Customer, Subscription, `SubscriptionItem`, `LicenseKey`,
//!    `LicenseKeyInstance`, Discount, `DiscountRedemption`, File, Variant,
//!    Webhook, `UsageRecord`. The first that accepts the object wins.
//! 4. Nothing accepts it: [`CorruptDataError`].
//!
//! # Example
//!
//! ```rust
//! use lemon_squeezy::rest::IncludedResource;
//! use serde_json::json;
//!
//! let included = IncludedResource::from_value(json!({
//!     "type": "license-key-instances",
//!     "id": "3",
//!     "attributes": {
//!         "license_key_id": 1,
//!         "identifier": "f70a79fa-6054-433e-9c1b-6075344292e4",
//!         "name": "Test",
//!         "created_at": "2022-11-14T11:45:39.000000Z",
//!         "updated_at": "2022-11-14T11:45:39.000000Z"
//!     }
//! }))
//! .unwrap();
//!
//! assert!(matches!(included, IncludedResource::LicenseKeyInstance(_)));
//! assert_eq!(included.id(), "3");
//! ```

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::rest::errors::CorruptDataError;
use crate::rest::resource::ResourceObject;
use crate::rest::resources::{
    Customer, Discount, DiscountRedemption, File, LicenseKey, LicenseKeyInstance, Order,
    OrderItem, Product, Store, Subscription, SubscriptionItem, UsageRecord, Variant, Webhook,
};

/// A related resource of any supported type.
#[derive(Debug, Clone, PartialEq)]
pub enum IncludedResource {
    /// A store.
    Store(Store),
    /// An order.
    Order(Order),
    /// An order item.
    OrderItem(OrderItem),
    /// A product.
    Product(Product),
    /// A customer.
    Customer(Customer),
    /// A subscription.
    Subscription(Subscription),
    /// A subscription item.
    SubscriptionItem(SubscriptionItem),
    /// A license key.
    LicenseKey(LicenseKey),
    /// An activated license key instance.
    LicenseKeyInstance(LicenseKeyInstance),
    /// A discount.
    Discount(Discount),
    /// A discount redemption.
    DiscountRedemption(DiscountRedemption),
    /// A downloadable file.
    File(File),
    /// A product variant.
    Variant(Variant),
    /// A webhook.
    Webhook(Webhook),
    /// A usage record.
    UsageRecord(UsageRecord),
}

type Decoder = fn(&Value) -> Option<IncludedResource>;

/// Decoders keyed by JSON:API `type`, in structural fallback order.
const DECODERS: &[(&str, Decoder)] = &[
    ("stores", |v| decode(v).map(IncludedResource::Store)),
    ("orders", |v| decode(v).map(IncludedResource::Order)),
    ("order-items", |v| decode(v).map(IncludedResource::OrderItem)),
    ("products", |v| decode(v).map(IncludedResource::Product)),
    ("customers", |v| decode(v).map(IncludedResource::Customer)),
    ("subscriptions", |v| decode(v).map(IncludedResource::Subscription)),
    ("subscription-items", |v| {
        decode(v).map(IncludedResource::SubscriptionItem)
    }),
    ("license-keys", |v| decode(v).map(IncludedResource::LicenseKey)),
    ("license-key-instances", |v| {
        decode(v).map(IncludedResource::LicenseKeyInstance)
    }),
    ("discounts", |v| decode(v).map(IncludedResource::Discount)),
    ("discount-redemptions", |v| {
        decode(v).map(IncludedResource::DiscountRedemption)
    }),
    ("files", |v| decode(v).map(IncludedResource::File)),
    ("variants", |v| decode(v).map(IncludedResource::Variant)),
    ("webhooks", |v| decode(v).map(IncludedResource::Webhook)),
    ("usage-records", |v| decode(v).map(IncludedResource::UsageRecord)),
];

fn decode<A: DeserializeOwned>(object: &Value) -> Option<ResourceObject<A>> {
    ResourceObject::<A>::deserialize(object).ok()
}

/// Members of a resource object that are never attributes.
const RESERVED_MEMBERS: [&str; 4] = ["id", "type", "relationships", "links"];

/// Lifts flat attributes into an `attributes` member.
fn normalize(value: Value) -> Value {
    let Value::Object(object) = value else {
        return value;
    };
    if object.get("attributes").is_some_and(Value::is_object) {
        return Value::Object(object);
    }

    let mut normalized = Map::new();
    let mut attributes = Map::new();
    for (key, member) in object {
        if RESERVED_MEMBERS.contains(&key.as_str()) {
            normalized.insert(key, member);
        } else {
            attributes.insert(key, member);
        }
    }
    normalized.insert("attributes".to_string(), Value::Object(attributes));
    Value::Object(normalized)
}

fn member_str<'a>(object: &'a Value, key: &str) -> &'a str {
    object.get(key).and_then(Value::as_str).unwrap_or_default()
}

impl IncludedResource {
    /// Decodes one resource object.
    ///
    /// # Errors
    ///
    /// Returns [`CorruptDataError`] if no known resource type accepts the
    /// object.
    pub fn from_value(value: Value) -> Result<Self, CorruptDataError> {
        let object = normalize(value);
        let kind = member_str(&object, "type");

        let typed = DECODERS.iter().find(|(name, _)| *name == kind);
        if let Some((_, decoder)) = typed {
            if let Some(resource) = decoder(&object) {
                return Ok(resource);
            }
        }

        for (name, decoder) in DECODERS {
            if typed.is_some_and(|(typed_name, _)| typed_name == name) {
                continue;
            }
            if let Some(resource) = decoder(&object) {
                tracing::warn!(
                    declared_type = kind,
                    decoded_as = *name,
                    id = member_str(&object, "id"),
                    "Included resource decoded structurally after a type mismatch"
                );
                return Ok(resource);
            }
        }

        Err(CorruptDataError {
            index: None,
            kind: kind.to_string(),
            id: member_str(&object, "id").to_string(),
        })
    }

    /// Returns the resource ID.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Store(r) => &r.id,
            Self::Order(r) => &r.id,
            Self::OrderItem(r) => &r.id,
            Self::Product(r) => &r.id,
            Self::Customer(r) => &r.id,
            Self::Subscription(r) => &r.id,
            Self::SubscriptionItem(r) => &r.id,
            Self::LicenseKey(r) => &r.id,
            Self::LicenseKeyInstance(r) => &r.id,
            Self::Discount(r) => &r.id,
            Self::DiscountRedemption(r) => &r.id,
            Self::File(r) => &r.id,
            Self::Variant(r) => &r.id,
            Self::Webhook(r) => &r.id,
            Self::UsageRecord(r) => &r.id,
        }
    }

    /// Returns the JSON:API `type` as sent by the server.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Store(r) => &r.kind,
            Self::Order(r) => &r.kind,
            Self::OrderItem(r) => &r.kind,
            Self::Product(r) => &r.kind,
            Self::Customer(r) => &r.kind,
            Self::Subscription(r) => &r.kind,
            Self::SubscriptionItem(r) => &r.kind,
            Self::LicenseKey(r) => &r.kind,
            Self::LicenseKeyInstance(r) => &r.kind,
            Self::Discount(r) => &r.kind,
            Self::DiscountRedemption(r) => &r.kind,
            Self::File(r) => &r.kind,
            Self::Variant(r) => &r.kind,
            Self::Webhook(r) => &r.kind,
            Self::UsageRecord(r) => &r.kind,
        }
    }
}

impl<'de> Deserialize<'de> for IncludedResource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}

impl Serialize for IncludedResource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Store(r) => r.serialize(serializer),
            Self::Order(r) => r.serialize(serializer),
            Self::OrderItem(r) => r.serialize(serializer),
            Self::Product(r) => r.serialize(serializer),
            Self::Customer(r) => r.serialize(serializer),
            Self::Subscription(r) => r.serialize(serializer),
            Self::SubscriptionItem(r) => r.serialize(serializer),
            Self::LicenseKey(r) => r.serialize(serializer),
            Self::LicenseKeyInstance(r) => r.serialize(serializer),
            Self::Discount(r) => r.serialize(serializer),
            Self::DiscountRedemption(r) => r.serialize(serializer),
            Self::File(r) => r.serialize(serializer),
            Self::Variant(r) => r.serialize(serializer),
            Self::Webhook(r) => r.serialize(serializer),
            Self::UsageRecord(r) => r.serialize(serializer),
        }
    }
}

/// Deserializes an optional `included` array, tagging failures with their index.
pub(crate) fn deserialize_included<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<IncludedResource>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(items) = Option::<Vec<Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            IncludedResource::from_value(item).map_err(|e| D::Error::custom(e.at_index(index)))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store_attributes() -> Value {
        json!({
            "name": "My Store",
            "slug": "my-store",
            "domain": "my-store.lemonsqueezy.com",
            "url": "https://my-store.lemonsqueezy.com",
            "avatar_url": "https://app.lemonsqueezy.com/storage/avatars/stores/1.png",
            "plan": "fresh",
            "country": "US",
            "country_nicename": "United States",
            "currency": "USD",
            "total_sales": 1,
            "total_revenue": 999,
            "thirty_day_sales": 0,
            "thirty_day_revenue": 0,
            "created_at": "2022-11-14T11:45:39.000000Z",
            "updated_at": "2022-11-14T11:45:39.000000Z"
        })
    }

    fn subscription_item_attributes() -> Value {
        json!({
            "subscription_id": 1,
            "price_id": 1,
            "quantity": 1,
            "is_usage_based": false,
            "created_at": "2023-07-18T12:16:24.000000Z",
            "updated_at": "2023-07-18T12:16:24.000000Z"
        })
    }

    #[test]
    fn test_flat_store_object_decodes_as_store() {
        let mut flat = store_attributes();
        flat["id"] = json!("1");
        flat["type"] = json!("stores");

        let included = IncludedResource::from_value(flat).unwrap();

        match &included {
            IncludedResource::Store(store) => {
                assert_eq!(store.id, "1");
                assert_eq!(store.attributes.name, "My Store");
            }
            other => panic!("Expected Store, got: {other:?}"),
        }
        assert_eq!(included.kind(), "stores");
    }

    #[test]
    fn test_nested_attributes_decode_by_type() {
        let object = json!({
            "type": "subscription-items",
            "id": "9",
            "attributes": subscription_item_attributes(),
            "relationships": {"subscription": {"links": {"related": "https://api.lemonsqueezy.com/v1/subscription-items/9/subscription"}}},
            "links": {"self": "https://api.lemonsqueezy.com/v1/subscription-items/9"}
        });

        let included = IncludedResource::from_value(object).unwrap();

        assert!(matches!(included, IncludedResource::SubscriptionItem(_)));
        assert_eq!(included.id(), "9");
    }

    #[test]
    fn test_unknown_type_falls_back_to_structure() {
        let object = json!({
            "type": "shops",
            "id": "1",
            "attributes": store_attributes()
        });

        let included = IncludedResource::from_value(object).unwrap();
        assert!(matches!(included, IncludedResource::Store(_)));
        assert_eq!(included.kind(), "shops");
    }

    #[test]
    fn test_wrong_type_falls_back_to_structure() {
        let object = json!({
            "type": "orders",
            "id": "4",
            "attributes": subscription_item_attributes()
        });

        let included = IncludedResource::from_value(object).unwrap();
        assert!(matches!(included, IncludedResource::SubscriptionItem(_)));
    }

    #[test]
    fn test_missing_id_and_type_default_to_empty() {
        let included = IncludedResource::from_value(store_attributes()).unwrap();

        assert!(matches!(included, IncludedResource::Store(_)));
        assert_eq!(included.id(), "");
        assert_eq!(included.kind(), "");
    }

    #[test]
    fn test_unmatched_object_is_corrupt_data() {
        let error = IncludedResource::from_value(json!({
            "type": "widgets",
            "id": "77",
            "attributes": {"colour": "blue"}
        }))
        .unwrap_err();

        assert_eq!(error.kind, "widgets");
        assert_eq!(error.id, "77");
        assert!(error.index.is_none());
    }

    #[test]
    fn test_included_array_error_names_index() {
        #[derive(Debug, Deserialize)]
        struct Envelope {
            #[serde(default, deserialize_with = "deserialize_included")]
            included: Option<Vec<IncludedResource>>,
        }

        let body = json!({
            "included": [
                {"type": "stores", "id": "1", "attributes": store_attributes()},
                {"type": "widgets", "id": "2", "attributes": {}}
            ]
        });

        let error = serde_json::from_value::<Envelope>(body).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("included[1]"), "{message}");
        assert!(message.contains("widgets"), "{message}");

        let envelope: Envelope = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.included.is_none());
    }

    #[test]
    fn test_serializes_back_to_resource_object() {
        let object = json!({
            "type": "stores",
            "id": "1",
            "attributes": store_attributes()
        });

        let included = IncludedResource::from_value(object.clone()).unwrap();
        assert_eq!(serde_json::to_value(&included).unwrap(), object);
    }
}
