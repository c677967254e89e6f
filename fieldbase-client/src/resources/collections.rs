use crate::client::{require, Client};
use crate::error::{ClientError, ClientResult, NotFoundMarker};
use crate::policy;
use crate::query::{ListOptions, QueryParams};
use fieldbase_types::{Collection, CollectionUpdate, DeleteSummary, NewCollection};
use reqwest::Method;
use tracing::info;

impl Client {
    /// Lists the collections of a database.
    pub async fn get_collections_by_database_id(
        &self,
        database_id: &str,
        options: &ListOptions,
    ) -> ClientResult<Vec<Collection>> {
        let database_id = require(database_id, "database_id")?;
        self.fetch(
            Method::GET,
            &format!("/databases/{database_id}/collections"),
            None,
            options.encode(),
            "collections",
        )
        .await
    }

    /// Fetches one collection with its fields. Any failure is reported as
    /// `None`.
    pub async fn get_collection_by_id(&self, id: &str) -> ClientResult<Option<Collection>> {
        let id = require(id, "id")?;
        policy::lookup(self.get(&format!("/collections/{id}"), "collection").await)
    }

    /// Creates a collection in `database_id`.
    ///
    /// The database id is injected into the body; everything else in
    /// `collection` is sent as given. Fails before sending when two fields
    /// claim the same primary role.
    pub async fn create_collection_by_database_id(
        &self,
        database_id: &str,
        collection: &NewCollection,
    ) -> ClientResult<Collection> {
        let database_id = require(database_id, "database_id")?;
        require(&collection.name, "name")?;
        let body = collection.to_body(database_id)?;

        let created: Collection = self
            .fetch(Method::POST, "/collections", Some(body), QueryParams::new(), "collection")
            .await?;
        info!("Created collection: {} (id: {})", created.name, created.id);
        Ok(created)
    }

    pub async fn update_collection(
        &self,
        id: &str,
        update: &CollectionUpdate,
    ) -> ClientResult<Option<Collection>> {
        let id = require(id, "id")?;
        if update.is_empty() {
            return Err(ClientError::MissingArgument("data"));
        }
        let body = serde_json::to_value(update)?;
        let result = self
            .fetch(
                Method::PATCH,
                &format!("/collections/{id}"),
                Some(body),
                QueryParams::new(),
                "collection",
            )
            .await;
        policy::mutation(result, NotFoundMarker::Id)
    }

    /// Deletes a collection and its items.
    pub async fn delete_collection(&self, id: &str) -> ClientResult<Option<DeleteSummary>> {
        let id = require(id, "id")?;
        let result = self.remove(&format!("/collections/{id}")).await;
        policy::mutation(result, NotFoundMarker::Id)
    }
}
