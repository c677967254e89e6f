//! Collection field definitions.
//!
//! A field's `type` decides which keys of its [`FieldValidations`] bag the
//! server honours. The client does not interpret validations; it only carries
//! them.

use crate::{TypesError, TypesResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// The data type of a collection field.
///
/// Serialized with the server's PascalCase names. Names this client does not
/// know yet are kept in [`FieldType::Other`] so snapshots still decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Bool,
    Color,
    Date,
    Email,
    Phone,
    ImageRef,
    ItemRef,
    ItemRefMulti,
    Link,
    Number,
    Option,
    PlainText,
    RichText,
    Video,
    User,
    Other(String),
}

/// Placeholder for snapshots listed without their `type` key.
impl Default for FieldType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bool => "Bool",
            Self::Color => "Color",
            Self::Date => "Date",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::ImageRef => "ImageRef",
            Self::ItemRef => "ItemRef",
            Self::ItemRefMulti => "ItemRefMulti",
            Self::Link => "Link",
            Self::Number => "Number",
            Self::Option => "Option",
            Self::PlainText => "PlainText",
            Self::RichText => "RichText",
            Self::Video => "Video",
            Self::User => "User",
            Self::Other(name) => name,
        }
    }

    /// Whether values of this type point at items of another collection.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::ItemRef | Self::ItemRefMulti)
    }
}

impl From<&str> for FieldType {
    fn from(name: &str) -> Self {
        match name {
            "Bool" => Self::Bool,
            "Color" => Self::Color,
            "Date" => Self::Date,
            "Email" => Self::Email,
            "Phone" => Self::Phone,
            "ImageRef" => Self::ImageRef,
            "ItemRef" => Self::ItemRef,
            "ItemRefMulti" => Self::ItemRefMulti,
            "Link" => Self::Link,
            "Number" => Self::Number,
            "Option" => Self::Option,
            "PlainText" => Self::PlainText,
            "RichText" => Self::RichText,
            "Video" => Self::Video,
            "User" => Self::User,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from(name.as_str()))
    }
}

/// Role a field can play for its collection. Each role belongs to at most
/// one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryRole {
    /// The field used as the item's display name.
    Name,
    /// The field used to build the item's slug.
    Slug,
}

impl fmt::Display for PrimaryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Slug => f.write_str("slug"),
        }
    }
}

/// One choice of an `Option` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub name: String,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Type-dependent constraint bag. Keys the client does not model are kept in
/// `extra` so an update round trip does not drop them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Upper bound in bytes for media fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,
    /// Number of decimal places for `Number` fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Target collection of `ItemRef` / `ItemRefMulti` fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A field of a collection as the server reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionField {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "editable_default")]
    pub editable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validations: Option<FieldValidations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<PrimaryRole>,
}

fn editable_default() -> bool {
    true
}

/// Payload for creating a field, either standalone or inside a
/// [`NewCollection`](crate::NewCollection).
///
/// Unset options are omitted from the request so the server defaults apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validations: Option<FieldValidations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<PrimaryRole>,
}

impl NewField {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            slug: None,
            required: None,
            editable: None,
            validations: None,
            help_text: None,
            primary: None,
        }
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    #[must_use]
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = Some(editable);
        self
    }

    #[must_use]
    pub fn validations(mut self, validations: FieldValidations) -> Self {
        self.validations = Some(validations);
        self
    }

    #[must_use]
    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    #[must_use]
    pub fn primary(mut self, role: PrimaryRole) -> Self {
        self.primary = Some(role);
        self
    }
}

/// Partial update of a field. Only set members are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validations: Option<FieldValidations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

impl FieldUpdate {
    /// True when the update would send an empty object.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.slug.is_none()
            && self.required.is_none()
            && self.editable.is_none()
            && self.validations.is_none()
            && self.help_text.is_none()
    }
}

/// Rejects a field list that assigns the same primary role twice.
///
/// The server enforces this too; checking here keeps an ambiguous create
/// request from ever leaving the client.
pub fn validate_primary_roles(fields: &[NewField]) -> TypesResult<()> {
    let mut name_field: Option<&str> = None;
    let mut slug_field: Option<&str> = None;

    for field in fields {
        let Some(role) = field.primary else { continue };
        let holder = match role {
            PrimaryRole::Name => &mut name_field,
            PrimaryRole::Slug => &mut slug_field,
        };
        if let Some(first) = holder {
            return Err(TypesError::DuplicatePrimary {
                role,
                first: (*first).to_string(),
                second: field.name.clone(),
            });
        }
        *holder = Some(field.name.as_str());
    }

    Ok(())
}
