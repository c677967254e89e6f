//! Authenticated request construction.
//!
//! Headers are derived once from the [`ClientConfig`] and cloned into every
//! request. Building never fails; bad paths or bodies surface when the
//! transport executes.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::query::QueryParams;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;

/// Header carrying the protocol version.
pub const ACCEPT_VERSION: &str = "accept-version";

/// A fully addressed request ready for a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL.
    pub url: String,
    /// Resource-relative path the URL was built from.
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
    pub query: QueryParams,
}

/// Turns `(method, path, body, query)` into an [`ApiRequest`].
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
    headers: HeaderMap,
}

impl RequestBuilder {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| ClientError::Config("token is not a valid header value".to_string()))?;
        authorization.set_sensitive(true);

        let version = HeaderValue::from_str(&config.version)
            .map_err(|_| ClientError::Config(format!("invalid version: {:?}", config.version)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(HeaderName::from_static(ACCEPT_VERSION), version);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Builds a request. A body passed with `GET` is dropped.
    pub fn build(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: QueryParams,
    ) -> ApiRequest {
        let body = if method == Method::GET { None } else { body };
        ApiRequest {
            url: format!("{}{}", self.base_url, path),
            path: path.to_string(),
            method,
            headers: self.headers.clone(),
            body,
            query,
        }
    }
}
