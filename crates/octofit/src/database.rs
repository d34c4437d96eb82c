use bson::doc;
use futures::TryStreamExt;
use mongodb::{Client, Collection, error::Result, options::ClientOptions};
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::models::CollectionDocument;

const APP_NAME: &str = "octofit-seed";

#[derive(Clone)]
pub struct Database {
    db: mongodb::Database,
}

impl Database {
    /// Opens a client and pings the server, so an unreachable host fails
    /// here rather than on the first read or write.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let uri = config.connection_uri();
        let mut options = ClientOptions::parse(uri.as_str()).await?;
        options.app_name = Some(APP_NAME.to_string());
        options.server_selection_timeout = Some(config.timeout());
        options.connect_timeout = Some(config.timeout());

        let client = Client::with_options(options)?;
        let db = client.database(&config.name);
        db.run_command(doc! { "ping": 1 }).await?;

        debug!("Connected to {} (database `{}`)", uri, config.name);
        Ok(Self { db })
    }

    pub fn name(&self) -> &str {
        self.db.name()
    }

    pub fn inner(&self) -> &mongodb::Database {
        &self.db
    }

    pub fn collection<T: CollectionDocument>(&self) -> Collection<T> {
        self.db.collection(T::COLLECTION)
    }

    /// Deletes every document in `T`'s collection, returning how many were removed.
    pub async fn clear<T: CollectionDocument>(&self) -> Result<u64> {
        let result = self.collection::<T>().delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    /// Inserts all records in one `insertMany`. An empty slice is a no-op.
    pub async fn insert_all<T: CollectionDocument>(&self, records: &[T]) -> Result<u64> {
        if records.is_empty() {
            return Ok(0);
        }

        let result = self.collection::<T>().insert_many(records).await?;
        Ok(result.inserted_ids.len() as u64)
    }

    pub async fn count<T: CollectionDocument>(&self) -> Result<u64> {
        self.collection::<T>().count_documents(doc! {}).await
    }

    pub async fn find_all<T: CollectionDocument>(&self) -> Result<Vec<T>> {
        let cursor = self.collection::<T>().find(doc! {}).await?;
        cursor.try_collect().await
    }
}
