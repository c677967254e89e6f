//! Item operations.
//!
//! Item shape is the caller's choice: `T` for what comes back, `D` for what
//! goes out. Data is sent exactly as it serializes; the server validates it
//! against the collection's fields.

use crate::client::{require, require_data, Client};
use crate::error::{ClientResult, NotFoundMarker};
use crate::policy;
use crate::query::{ListOptions, QueryParams};
use fieldbase_types::{DeleteSummary, Item};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

impl Client {
    pub async fn get_items<T: DeserializeOwned>(
        &self,
        collection_id: &str,
        options: &ListOptions,
    ) -> ClientResult<Vec<Item<T>>> {
        let collection_id = require(collection_id, "collection_id")?;
        self.fetch(
            Method::GET,
            &format!("/collections/{collection_id}/items"),
            None,
            options.encode(),
            "items",
        )
        .await
    }

    /// Fetches one item. Any failure is reported as `None`.
    pub async fn get_item_by_id<T: DeserializeOwned>(
        &self,
        collection_id: &str,
        item_id: &str,
    ) -> ClientResult<Option<Item<T>>> {
        let collection_id = require(collection_id, "collection_id")?;
        let item_id = require(item_id, "item_id")?;
        policy::lookup(
            self.get(&format!("/collections/{collection_id}/items/{item_id}"), "item")
                .await,
        )
    }

    pub async fn create_item<T, D>(&self, collection_id: &str, data: &D) -> ClientResult<Item<T>>
    where
        T: DeserializeOwned,
        D: Serialize + ?Sized,
    {
        let collection_id = require(collection_id, "collection_id")?;
        let body = require_data(data)?;
        self.fetch(
            Method::POST,
            &format!("/collections/{collection_id}/items"),
            Some(body),
            QueryParams::new(),
            "item",
        )
        .await
    }

    /// Updates only the fields present in `data`.
    pub async fn patch_item<T, D>(
        &self,
        collection_id: &str,
        item_id: &str,
        data: &D,
    ) -> ClientResult<Option<Item<T>>>
    where
        T: DeserializeOwned,
        D: Serialize + ?Sized,
    {
        self.write_item(Method::PATCH, collection_id, item_id, data)
            .await
    }

    /// Replaces the item's user-defined fields with `data`.
    pub async fn update_item<T, D>(
        &self,
        collection_id: &str,
        item_id: &str,
        data: &D,
    ) -> ClientResult<Option<Item<T>>>
    where
        T: DeserializeOwned,
        D: Serialize + ?Sized,
    {
        self.write_item(Method::PUT, collection_id, item_id, data)
            .await
    }

    pub async fn delete_item(
        &self,
        collection_id: &str,
        item_id: &str,
    ) -> ClientResult<Option<DeleteSummary>> {
        let collection_id = require(collection_id, "collection_id")?;
        let item_id = require(item_id, "item_id")?;
        let result = self
            .remove(&format!("/collections/{collection_id}/items/{item_id}"))
            .await;
        policy::mutation(result, NotFoundMarker::Id)
    }

    async fn write_item<T, D>(
        &self,
        method: Method,
        collection_id: &str,
        item_id: &str,
        data: &D,
    ) -> ClientResult<Option<Item<T>>>
    where
        T: DeserializeOwned,
        D: Serialize + ?Sized,
    {
        let collection_id = require(collection_id, "collection_id")?;
        let item_id = require(item_id, "item_id")?;
        let body = require_data(data)?;
        let result = self
            .fetch(
                method,
                &format!("/collections/{collection_id}/items/{item_id}"),
                Some(body),
                QueryParams::new(),
                "item",
            )
            .await;
        policy::mutation(result, NotFoundMarker::Id)
    }
}
