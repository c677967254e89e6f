//! Response envelope unwrapping.
//!
//! Successful bodies look like `{"status": "success", "<key>": payload}`;
//! list endpoints may add `results`, `page` and `limit` beside the payload.
//! Callers always get the payload, never the envelope.

use crate::error::{ClientError, ClientResult};
use fieldbase_types::DeleteSummary;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Extracts and decodes the sub-value under `key`.
pub fn unwrap_payload<T: DeserializeOwned>(body: Value, key: &str) -> ClientResult<T> {
    let mut envelope = into_object(body)?;
    let payload = envelope
        .remove(key)
        .ok_or_else(|| ClientError::Envelope(format!("response has no `{key}` payload")))?;
    Ok(serde_json::from_value(payload)?)
}

/// Drops the `status` key and returns every other key verbatim.
pub fn strip_status(body: Value) -> ClientResult<Map<String, Value>> {
    let mut envelope = into_object(body)?;
    envelope.remove("status");
    Ok(envelope)
}

/// Delete endpoints report counts instead of an entity.
pub fn unwrap_delete_summary(body: Value) -> ClientResult<DeleteSummary> {
    let counts = strip_status(body)?;
    Ok(serde_json::from_value(Value::Object(counts))?)
}

fn into_object(body: Value) -> ClientResult<Map<String, Value>> {
    match body {
        Value::Object(map) => Ok(map),
        other => Err(ClientError::Envelope(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}
