//! Typed async client for the Fieldbase content API.
//!
//! The API exposes a resource hierarchy of databases, their collections, the
//! fields of each collection, and the items stored in a collection. Every
//! operation is one stateless round trip; the client caches nothing.
//!
//! # Request path
//!
//! - **Request builder**: derives the four fixed headers (`Accept`,
//!   `Authorization: Bearer`, `accept-version`, `Content-Type`) once and
//!   addresses every request against the base URL
//! - **Query encoding**: [`ListOptions`] becomes flat query parameters, with
//!   `fields` joined by commas
//! - **Transport**: any [`Transport`]; [`HttpTransport`] uses `reqwest`
//! - **Envelope**: `{"status": "success", "<key>": payload}` is unwrapped to
//!   the payload
//!
//! # Outcomes
//!
//! | Operation kind | On failure |
//! |---|---|
//! | get by id | `Ok(None)` |
//! | update / delete | `Ok(None)` for 404 or a not-found message, else `Err` |
//! | create / list / current user | `Err` |
//! | share | `Ok(ShareOutcome { shared: false, .. })` |
//!
//! Empty required arguments fail with [`ClientError::MissingArgument`] before
//! anything is sent.
//!
//! # Example
//!
//! ```no_run
//! use fieldbase_client::{Client, ClientConfig, ListOptions};
//!
//! # async fn run() -> fieldbase_client::ClientResult<()> {
//! let client = Client::new(ClientConfig::new("my-token"))?;
//! let databases = client
//!     .get_databases(&ListOptions::new().limit(10).fields(["name", "slug"]))
//!     .await?;
//! for db in databases {
//!     println!("{} ({})", db.name, db.id);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod completion;
mod config;
pub mod envelope;
mod error;
mod policy;
mod query;
mod request;
mod resources;
mod transport;

pub use client::Client;
pub use completion::{on_complete, OnComplete};
pub use config::{ClientConfig, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
pub use error::{ApiErrorBody, ClientError, ClientResult, FailureKind, NotFoundMarker};
pub use query::{ListOptions, QueryParams};
pub use request::{ApiRequest, RequestBuilder, ACCEPT_VERSION};
pub use transport::{HttpTransport, Transport};

pub use fieldbase_types as types;
pub use fieldbase_types::{
    Collection, CollectionField, CollectionUpdate, Database, DeleteSummary, FieldType,
    FieldUpdate, FieldValidations, Item, ItemData, NewCollection, NewField, PrimaryRole,
    ShareOutcome, User,
};
pub use reqwest::Method;
