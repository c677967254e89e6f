//! Client error types.

use fieldbase_types::TypesError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required argument was empty. Raised before any request is built.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// A request payload was rejected before sending.
    #[error("invalid request payload: {0}")]
    InvalidPayload(#[from] TypesError),

    /// The server answered with a non-2xx status.
    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: ApiErrorBody },

    /// No HTTP response at all (DNS, connect, TLS, body read).
    #[error("transport error: {0}")]
    Transport(String),

    /// A 2xx response did not carry the expected envelope payload.
    #[error("unexpected response envelope: {0}")]
    Envelope(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status of an API failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server's decoded error body of an API failure.
    pub fn body(&self) -> Option<&ApiErrorBody> {
        match self {
            ClientError::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Classifies an API failure against a resource's not-found marker.
    ///
    /// Returns `None` for failures that never reached the server or never
    /// left the client; those are not subject to not-found detection.
    pub fn classify(&self, marker: NotFoundMarker) -> Option<FailureKind> {
        let ClientError::Api { status, body } = self else {
            return None;
        };
        let marked = body
            .message()
            .is_some_and(|msg| msg.starts_with(marker.prefix()));
        if *status == 404 || marked {
            Some(FailureKind::NotFound)
        } else {
            Some(FailureKind::Api)
        }
    }
}

/// Outcome class of an API failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The targeted entity does not exist; surfaced to callers as `None`.
    NotFound,
    /// Any other server-side failure; propagated with its body.
    Api,
}

/// Message prefix a resource kind's API uses to report an unknown id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundMarker {
    /// Database endpoints: `"Invalid database"`.
    Database,
    /// Collection, field and item endpoints: `"Invalid _id"`.
    Id,
}

impl NotFoundMarker {
    pub const fn prefix(self) -> &'static str {
        match self {
            NotFoundMarker::Database => "Invalid database",
            NotFoundMarker::Id => "Invalid _id",
        }
    }
}

/// Raw decoded error body from the server, kept as structured JSON.
///
/// Most endpoints send `{"message": "..."}`; some nest it as
/// `{"data": {"message": "..."}}`. [`message`](Self::message) reads both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiErrorBody(Value);

impl ApiErrorBody {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Wraps a non-JSON error text as `{"message": text}`.
    pub fn from_text(text: &str) -> Self {
        Self(serde_json::json!({ "message": text }))
    }

    pub fn message(&self) -> Option<&str> {
        self.0
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| self.0.pointer("/data/message").and_then(Value::as_str))
    }

    /// Looks up a structured detail by JSON pointer (e.g. `"/errors/0/path"`).
    pub fn detail(&self, pointer: &str) -> Option<&Value> {
        self.0.pointer(pointer)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => f.write_str(msg),
            None => write!(f, "{}", self.0),
        }
    }
}
