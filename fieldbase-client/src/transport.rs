//! Transport layer abstraction.
//!
//! The client never touches sockets. It hands an [`ApiRequest`] to a
//! [`Transport`] and gets back the decoded JSON body of a 2xx response, or an
//! error carrying the decoded body of a non-2xx one.

use crate::config::ClientConfig;
use crate::error::{ApiErrorBody, ClientError, ClientResult};
use crate::request::ApiRequest;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Executes requests against the API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a request and returns the decoded response body.
    ///
    /// Non-2xx responses must fail with [`ClientError::Api`]; failures with no
    /// response at all with [`ClientError::Transport`].
    async fn send(&self, request: ApiRequest) -> ClientResult<Value>;
}

/// Default transport built on `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest` client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<Value> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(request.headers);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("{} {} failed: {e}", request.method, request.path)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(format!("failed to read response body: {e}")))?;

        debug!("{} {} -> {}", request.method, request.path, status.as_u16());

        if status.is_success() {
            decode_success(&text)
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                body: decode_error(&text),
            })
        }
    }
}

fn decode_success(text: &str) -> ClientResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    Ok(serde_json::from_str(text)?)
}

fn decode_error(text: &str) -> ApiErrorBody {
    if text.trim().is_empty() {
        return ApiErrorBody::new(Value::Object(Default::default()));
    }
    serde_json::from_str(text)
        .map(ApiErrorBody::new)
        .unwrap_or_else(|_| ApiErrorBody::from_text(text))
}
