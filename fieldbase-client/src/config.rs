//! Client construction settings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.fieldbase.io/v1";

/// Protocol version sent in `accept-version` unless overridden.
pub const DEFAULT_API_VERSION: &str = "1.0.0";

/// Settings a [`Client`](crate::Client) is built from. Immutable once the
/// client exists.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API token sent as `Authorization: Bearer <token>`. Required.
    pub token: String,
    /// Protocol version sent as `accept-version`.
    #[serde(default = "default_version")]
    pub version: String,
    /// Absolute base URL that resource paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Overall request timeout for the built-in HTTP transport. `None` leaves
    /// reqwest's default (no deadline).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            version: default_version(),
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("version", &self.version)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}
