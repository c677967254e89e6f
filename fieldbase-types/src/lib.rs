//! Entity snapshots and request payloads for the Fieldbase content API.
//!
//! This crate defines the wire-level types exchanged with the server:
//! - [`Database`], [`Collection`], [`CollectionField`], [`Item`] and [`User`]
//!   snapshots as the server returns them
//! - Request payloads ([`NewCollection`], [`NewField`], [`CollectionUpdate`],
//!   [`FieldUpdate`]) with the few checks the client performs before sending
//! - Operation reports ([`DeleteSummary`], [`ShareOutcome`])
//!
//! Snapshots require only `_id`: list calls with a `fields` selection return
//! partial entities, so every other attribute decodes to its default when
//! absent. Every snapshot is immutable and owned by the server. Nothing here
//! caches or mutates remote state; the client crate performs the round trips.

mod collection;
mod database;
mod field;
mod item;
mod report;
mod user;

pub use collection::{Collection, CollectionUpdate, NewCollection};
pub use database::Database;
pub use field::{
    validate_primary_roles, CollectionField, FieldOption, FieldType, FieldUpdate,
    FieldValidations, NewField, PrimaryRole,
};
pub use item::{Item, ItemData};
pub use report::{DeleteSummary, ShareOutcome};
pub use user::User;

/// Result type alias using the crate's error type.
pub type TypesResult<T> = std::result::Result<T, TypesError>;

/// Errors raised while composing request payloads.
#[derive(Debug, thiserror::Error)]
pub enum TypesError {
    #[error("more than one field marked primary {role}: {first:?} and {second:?}")]
    DuplicatePrimary {
        role: PrimaryRole,
        first: String,
        second: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
