use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Counts returned by delete endpoints, with the envelope `status` removed.
///
/// Database deletes report cascaded collection and item counts, collection
/// deletes report items, field deletes report a boolean. Anything else the
/// server adds is kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub databases_deleted: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collections_deleted: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_deleted: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_deleted: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Best-effort report of a share request. Never carries an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareOutcome {
    pub shared: bool,
    pub message: String,
}

impl ShareOutcome {
    pub fn shared(message: impl Into<String>) -> Self {
        Self {
            shared: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            shared: false,
            message: message.into(),
        }
    }
}
