//! Resource operations, one module per resource kind.
//!
//! | Kind | Paths |
//! |---|---|
//! | database | `/databases`, `/databases/{id}`, `/databases/{id}/share` |
//! | collection | `/databases/{id}/collections`, `/collections`, `/collections/{id}` |
//! | field | `/collections/{id}/fields`, `/collections/{id}/fields/{fieldId}` |
//! | item | `/collections/{id}/items`, `/collections/{id}/items/{itemId}` |
//! | user | `/users/me` |
//!
//! Ids are interpolated into paths as given.

mod collections;
mod databases;
mod fields;
mod items;
mod users;
