//! Shared test helpers for client tests.

#![allow(dead_code)]

use async_trait::async_trait;
use fieldbase_client::{
    ApiErrorBody, ApiRequest, Client, ClientConfig, ClientError, ClientResult, Transport,
};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use wiremock::MockServer;

pub const TOKEN: &str = "abc";

/// Transport that records every request and answers from a script.
///
/// Once the script runs out it answers `{"status": "success"}`.
#[derive(Default)]
pub struct SpyTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<ClientResult<Value>>>,
}

impl SpyTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn scripted(responses: Vec<ClientResult<Value>>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait]
impl Transport for SpyTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<Value> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({ "status": "success" })))
    }
}

/// Client wired to a spy transport.
pub fn spy_client(spy: &Arc<SpyTransport>) -> Client {
    Client::with_transport(ClientConfig::new(TOKEN), spy.clone()).unwrap()
}

/// Client pointed at a wiremock server.
pub fn mock_client(server: &MockServer) -> Client {
    Client::new(ClientConfig::new(TOKEN).with_base_url(server.uri())).unwrap()
}

/// A non-2xx API failure with the given JSON body.
pub fn api_error(status: u16, body: Value) -> ClientError {
    ClientError::Api {
        status,
        body: ApiErrorBody::new(body),
    }
}

pub fn database_json(id: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "slug": name.to_lowercase(),
        "createdBy": "user_1",
        "timezone": "Europe/London",
        "createdAt": "2024-03-01T12:00:00Z"
    })
}

pub fn collection_json(id: &str, database: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "singularName": name.trim_end_matches('s'),
        "database": database,
        "slug": name.to_lowercase(),
        "shortId": "c7Yd",
        "createdBy": "user_1",
        "updatedBy": "user_1",
        "createdAt": "2024-03-01T12:00:00Z",
        "lastUpdated": "2024-03-02T08:30:00Z",
        "fields": [
            {
                "_id": "f_name",
                "name": "Name",
                "type": "PlainText",
                "slug": "name",
                "required": true,
                "editable": true,
                "primary": "name",
                "validations": { "maxLength": 256 }
            }
        ]
    })
}

pub fn field_json(id: &str, name: &str, field_type: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "type": field_type,
        "slug": name.to_lowercase(),
        "required": false,
        "editable": true
    })
}

pub fn item_json(id: &str, collection: &str) -> Value {
    json!({
        "_id": id,
        "_cid": collection,
        "database": "db_1",
        "created-by": "user_1",
        "updated-by": "user_1",
        "created-on": "2024-03-01T12:00:00Z",
        "updated-on": "2024-03-01T12:00:00Z",
        "name": "Falcons",
        "rating": 7
    })
}
