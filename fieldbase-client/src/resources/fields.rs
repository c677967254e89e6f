//! Collection field operations.
//!
//! Every operation takes an optional [`OnComplete`] handler, fired once with
//! the same outcome the call returns (validation failures included).

use crate::client::{require, Client};
use crate::completion::{notify, OnComplete};
use crate::error::{ClientError, ClientResult, NotFoundMarker};
use crate::policy;
use crate::query::QueryParams;
use fieldbase_types::{CollectionField, DeleteSummary, FieldUpdate, NewField};
use reqwest::Method;

impl Client {
    pub async fn get_fields(
        &self,
        collection_id: &str,
        on_complete: Option<OnComplete<'_, Vec<CollectionField>>>,
    ) -> ClientResult<Vec<CollectionField>> {
        notify(on_complete, self.list_fields(collection_id).await)
    }

    /// Fetches one field. Any failure is reported as `None`.
    pub async fn get_field_by_id(
        &self,
        collection_id: &str,
        field_id: &str,
        on_complete: Option<OnComplete<'_, Option<CollectionField>>>,
    ) -> ClientResult<Option<CollectionField>> {
        notify(on_complete, self.lookup_field(collection_id, field_id).await)
    }

    pub async fn create_field(
        &self,
        collection_id: &str,
        field: &NewField,
        on_complete: Option<OnComplete<'_, CollectionField>>,
    ) -> ClientResult<CollectionField> {
        notify(on_complete, self.post_field(collection_id, field).await)
    }

    pub async fn update_field(
        &self,
        collection_id: &str,
        field_id: &str,
        update: &FieldUpdate,
        on_complete: Option<OnComplete<'_, Option<CollectionField>>>,
    ) -> ClientResult<Option<CollectionField>> {
        notify(on_complete, self.patch_field(collection_id, field_id, update).await)
    }

    pub async fn delete_field(
        &self,
        collection_id: &str,
        field_id: &str,
        on_complete: Option<OnComplete<'_, Option<DeleteSummary>>>,
    ) -> ClientResult<Option<DeleteSummary>> {
        notify(on_complete, self.remove_field(collection_id, field_id).await)
    }

    async fn list_fields(&self, collection_id: &str) -> ClientResult<Vec<CollectionField>> {
        let collection_id = require(collection_id, "collection_id")?;
        self.get(&format!("/collections/{collection_id}/fields"), "fields")
            .await
    }

    async fn lookup_field(
        &self,
        collection_id: &str,
        field_id: &str,
    ) -> ClientResult<Option<CollectionField>> {
        let collection_id = require(collection_id, "collection_id")?;
        let field_id = require(field_id, "field_id")?;
        policy::lookup(
            self.get(&format!("/collections/{collection_id}/fields/{field_id}"), "field")
                .await,
        )
    }

    async fn post_field(&self, collection_id: &str, field: &NewField) -> ClientResult<CollectionField> {
        let collection_id = require(collection_id, "collection_id")?;
        require(&field.name, "name")?;
        let body = serde_json::to_value(field)?;
        self.fetch(
            Method::POST,
            &format!("/collections/{collection_id}/fields"),
            Some(body),
            QueryParams::new(),
            "field",
        )
        .await
    }

    async fn patch_field(
        &self,
        collection_id: &str,
        field_id: &str,
        update: &FieldUpdate,
    ) -> ClientResult<Option<CollectionField>> {
        let collection_id = require(collection_id, "collection_id")?;
        let field_id = require(field_id, "field_id")?;
        if update.is_empty() {
            return Err(ClientError::MissingArgument("data"));
        }
        let body = serde_json::to_value(update)?;
        let result = self
            .fetch(
                Method::PATCH,
                &format!("/collections/{collection_id}/fields/{field_id}"),
                Some(body),
                QueryParams::new(),
                "field",
            )
            .await;
        policy::mutation(result, NotFoundMarker::Id)
    }

    async fn remove_field(
        &self,
        collection_id: &str,
        field_id: &str,
    ) -> ClientResult<Option<DeleteSummary>> {
        let collection_id = require(collection_id, "collection_id")?;
        let field_id = require(field_id, "field_id")?;
        let result = self
            .remove(&format!("/collections/{collection_id}/fields/{field_id}"))
            .await;
        policy::mutation(result, NotFoundMarker::Id)
    }
}
