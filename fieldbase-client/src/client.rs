//! The API client handle.

use crate::config::ClientConfig;
use crate::envelope;
use crate::error::{ClientError, ClientResult};
use crate::query::QueryParams;
use crate::request::RequestBuilder;
use crate::transport::{HttpTransport, Transport};
use fieldbase_types::DeleteSummary;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Typed client for the Fieldbase API.
///
/// Cheap to clone. Holds only immutable configuration, so concurrent calls
/// need no coordination.
#[derive(Clone)]
pub struct Client {
    requests: RequestBuilder,
    version: String,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client backed by the built-in HTTP transport.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        check_token(&config)?;
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a client that sends through `transport`.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> ClientResult<Self> {
        check_token(&config)?;
        Ok(Self {
            requests: RequestBuilder::new(&config)?,
            version: config.version,
            transport,
        })
    }

    pub fn base_url(&self) -> &str {
        self.requests.base_url()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Builds and sends one request, returning the raw response body.
    pub(crate) async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: QueryParams,
    ) -> ClientResult<Value> {
        let request = self.requests.build(method, path, body, query);
        debug!("{} {}", request.method, request.path);
        self.transport.send(request).await
    }

    /// Sends a request and unwraps the payload under `key`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: QueryParams,
        key: &str,
    ) -> ClientResult<T> {
        let response = self.call(method, path, body, query).await?;
        envelope::unwrap_payload(response, key)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, key: &str) -> ClientResult<T> {
        self.fetch(Method::GET, path, None, QueryParams::new(), key).await
    }

    pub(crate) async fn remove(&self, path: &str) -> ClientResult<DeleteSummary> {
        let response = self.call(Method::DELETE, path, None, QueryParams::new()).await?;
        envelope::unwrap_delete_summary(response)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url())
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

fn check_token(config: &ClientConfig) -> ClientResult<()> {
    if config.token.trim().is_empty() {
        return Err(ClientError::MissingArgument("token"));
    }
    Ok(())
}

/// Rejects an empty or whitespace-only required argument.
pub(crate) fn require<'a>(value: &'a str, name: &'static str) -> ClientResult<&'a str> {
    if value.trim().is_empty() {
        Err(ClientError::MissingArgument(name))
    } else {
        Ok(value)
    }
}

/// Serializes caller data, rejecting `null` and `{}` as missing.
pub(crate) fn require_data<D: serde::Serialize + ?Sized>(data: &D) -> ClientResult<Value> {
    let value = serde_json::to_value(data)?;
    let blank = match &value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if blank {
        return Err(ClientError::MissingArgument("data"));
    }
    Ok(value)
}
