//! Usage record resource implementation.
//!
//! Usage records report consumption for usage-based subscription items.

use serde::{Deserialize, Serialize};

use crate::rest::{Endpoint, ResourceObject, RestResource};

/// Attributes of a usage record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecordAttributes {
    pub subscription_item_id: u64,
    pub quantity: i64,
    /// `increment` or `set`.
    pub action: String,
    pub created_at: String,
    pub updated_at: String,
}

impl RestResource for UsageRecordAttributes {
    const NAME: &'static str = "UsageRecord";
    const TYPE: &'static str = "usage-records";

    fn find_endpoint(id: String) -> Endpoint {
        Endpoint::UsageRecord(id)
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::UsageRecords
    }
}

/// A usage record.
pub type UsageRecord = ResourceObject<UsageRecordAttributes>;
