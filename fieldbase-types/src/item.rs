use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open map of user-defined values keyed by the owning collection's field
/// slugs. The server is the only validator of its shape.
pub type ItemData = Map<String, Value>;

/// An item of a collection.
///
/// The system keys are modelled; everything else lands in `data`, which is
/// either the open [`ItemData`] map or any caller type that deserializes from
/// the remaining keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item<T = ItemData> {
    #[serde(rename = "_id")]
    pub id: String,
    /// Owning collection id.
    #[serde(rename = "_cid", default)]
    pub collection_id: String,
    /// Owning database id.
    #[serde(default)]
    pub database: String,
    #[serde(rename = "created-by", default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(rename = "updated-by", default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(rename = "created-on", default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(rename = "updated-on", default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub data: T,
}

impl Item<ItemData> {
    /// Value of a user-defined field by slug.
    pub fn get(&self, slug: &str) -> Option<&Value> {
        self.data.get(slug)
    }

    pub fn get_str(&self, slug: &str) -> Option<&str> {
        self.get(slug).and_then(Value::as_str)
    }
}
