use crate::field::{validate_primary_roles, CollectionField, NewField};
use crate::TypesResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A collection inside a database, with its ordered field list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub singular_name: String,
    /// Id of the owning database.
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fields: Vec<CollectionField>,
}

impl Collection {
    /// Looks up a field by slug.
    pub fn field(&self, slug: &str) -> Option<&CollectionField> {
        self.fields.iter().find(|f| f.slug == slug)
    }
}

/// Payload for creating a collection. The owning database id is added by the
/// client at send time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCollection {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub singular_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<NewField>,
}

impl NewCollection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            singular_name: None,
            slug: None,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn singular_name(mut self, singular_name: impl Into<String>) -> Self {
        self.singular_name = Some(singular_name.into());
        self
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: NewField) -> Self {
        self.fields.push(field);
        self
    }

    /// Builds the request body: `{"database": <id>, ...self}`.
    ///
    /// Fails when two fields claim the same primary role.
    pub fn to_body(&self, database_id: &str) -> TypesResult<Value> {
        validate_primary_roles(&self.fields)?;

        let mut body = serde_json::Map::new();
        body.insert("database".into(), Value::String(database_id.to_string()));
        if let Value::Object(rest) = serde_json::to_value(self)? {
            body.extend(rest);
        }
        Ok(Value::Object(body))
    }
}

/// Partial update of a collection. Only set members are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub singular_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl CollectionUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.singular_name.is_none() && self.slug.is_none()
    }
}
