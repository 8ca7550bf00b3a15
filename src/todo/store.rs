//! MongoDB collection accessor for todo records.

use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Collection};
use tracing::{debug, info};

use crate::config::Config;
use crate::todo::Todo;

/// Handle to the todo collection.
///
/// Cheap to clone; the driver pools connections internally, so a single
/// store is shared across all request handlers without extra locking.
#[derive(Clone)]
pub struct TodoStore {
    collection: Collection<Todo>,
}

impl TodoStore {
    /// Connect to MongoDB and verify the deployment with a ping.
    ///
    /// Any failure here is fatal: the service cannot run without storage.
    pub async fn connect(config: &Config) -> crate::Result<Self> {
        let client = Client::with_uri_str(&config.mongodb_uri).await?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        info!("connected to MongoDB");

        Ok(Self::with_client(&client, config))
    }

    /// Build a store from an existing client without pinging.
    pub fn with_client(client: &Client, config: &Config) -> Self {
        let collection = client
            .database(&config.mongodb_database)
            .collection(&config.mongodb_collection);
        Self { collection }
    }

    /// Fetch all todos in storage-native order.
    pub async fn list(&self) -> Result<Vec<Todo>, mongodb::error::Error> {
        let cursor = self.collection.find(doc! {}).await?;
        cursor.try_collect().await
    }

    /// Insert a todo and return it with the driver-assigned identifier.
    pub async fn create(&self, mut todo: Todo) -> Result<Todo, mongodb::error::Error> {
        let result = self.collection.insert_one(&todo).await?;
        todo.id = result.inserted_id.as_object_id();
        Ok(todo)
    }

    /// Mark the matching todo completed. No-op when nothing matches.
    pub async fn complete(&self, id: ObjectId) -> Result<u64, mongodb::error::Error> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "completed": true } })
            .await?;
        debug!(%id, matched = result.matched_count, "todo marked completed");
        Ok(result.matched_count)
    }

    /// Delete the matching todo. No-op when nothing matches.
    pub async fn delete(&self, id: ObjectId) -> Result<u64, mongodb::error::Error> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        debug!(%id, deleted = result.deleted_count, "todo deleted");
        Ok(result.deleted_count)
    }
}
