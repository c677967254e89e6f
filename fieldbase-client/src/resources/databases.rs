use crate::client::{require, Client};
use crate::error::{ApiErrorBody, ClientResult, NotFoundMarker};
use crate::policy;
use crate::query::{ListOptions, QueryParams};
use fieldbase_types::{Database, DeleteSummary, ShareOutcome};
use reqwest::Method;
use serde_json::{json, Value};
use tracing::{info, warn};

impl Client {
    /// Lists the databases visible to the token.
    pub async fn get_databases(&self, options: &ListOptions) -> ClientResult<Vec<Database>> {
        self.fetch(Method::GET, "/databases", None, options.encode(), "databases")
            .await
    }

    /// Fetches one database. Any failure is reported as `None`.
    pub async fn get_database_by_id(&self, id: &str) -> ClientResult<Option<Database>> {
        let id = require(id, "id")?;
        policy::lookup(self.get(&format!("/databases/{id}"), "database").await)
    }

    pub async fn create_database(&self, name: &str) -> ClientResult<Database> {
        let name = require(name, "name")?;
        let database: Database = self
            .fetch(
                Method::POST,
                "/databases",
                Some(json!({ "name": name })),
                QueryParams::new(),
                "database",
            )
            .await?;
        info!("Created database: {} (id: {})", database.name, database.id);
        Ok(database)
    }

    /// Renames a database. The name is the only mutable attribute.
    pub async fn update_database(&self, id: &str, name: &str) -> ClientResult<Option<Database>> {
        let id = require(id, "id")?;
        let name = require(name, "name")?;
        let result = self
            .fetch(
                Method::PATCH,
                &format!("/databases/{id}"),
                Some(json!({ "name": name })),
                QueryParams::new(),
                "database",
            )
            .await;
        policy::mutation(result, NotFoundMarker::Database)
    }

    /// Deletes a database with its collections and items.
    pub async fn delete_database(&self, id: &str) -> ClientResult<Option<DeleteSummary>> {
        let id = require(id, "id")?;
        let result = self.remove(&format!("/databases/{id}")).await;
        let summary = policy::mutation(result, NotFoundMarker::Database)?;
        if summary.is_some() {
            info!("Deleted database: {}", id);
        }
        Ok(summary)
    }

    /// Shares a database with another account.
    ///
    /// Never fails once the arguments are present: a rejected share comes
    /// back as `shared: false` with the server's message.
    pub async fn share_database(&self, id: &str, email: &str) -> ClientResult<ShareOutcome> {
        let id = require(id, "id")?;
        let email = require(email, "email")?;

        let result = self
            .call(
                Method::POST,
                &format!("/databases/{id}/share"),
                Some(json!({ "email": email })),
                QueryParams::new(),
            )
            .await;

        Ok(match result {
            Ok(body) => {
                let message = body
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("database shared");
                ShareOutcome::shared(message)
            }
            Err(err) => {
                warn!("Sharing database {} failed: {}", id, err);
                let message = err
                    .body()
                    .and_then(ApiErrorBody::message)
                    .map(str::to_string)
                    .unwrap_or_else(|| err.to_string());
                ShareOutcome::failed(message)
            }
        })
    }
}
