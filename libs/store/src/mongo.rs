//! MongoDB implementation of the DocumentStore trait.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::options::{ClientOptions, FindOptions};
use mongodb::{Client, Database};
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::retry::{RetryConfig, retry_with_backoff};
use crate::store::DocumentStore;

/// MongoDB-backed document store.
///
/// Holds an `Option<Database>`: when the connection string is missing or the
/// server cannot be reached at startup, the handle stays `None` and every
/// operation returns [`StoreError::Unavailable`] instead of panicking or
/// taking the process down.
pub struct MongoStore {
    db: Option<Database>,
}

impl MongoStore {
    /// Connect using the given configuration.
    ///
    /// Connection failures are retried with exponential backoff and jitter;
    /// once the retries are exhausted the store degrades rather than failing
    /// startup. Startup always proceeds; the diagnostics endpoint reports
    /// the resulting state.
    pub async fn connect(config: &StoreConfig) -> Self {
        let (Some(url), Some(name)) = (&config.url, &config.database) else {
            warn!("DATABASE_URL or DATABASE_NAME not set, document store starts degraded");
            return Self::disconnected();
        };

        match retry_with_backoff(|| try_connect(config, url), RetryConfig::default()).await {
            Ok(client) => {
                info!(database = %name, "Connected to MongoDB");
                Self {
                    db: Some(client.database(name)),
                }
            }
            Err(e) => {
                warn!(error = %e, "Could not reach MongoDB, document store starts degraded");
                Self::disconnected()
            }
        }
    }

    /// A store with no database handle; every operation reports unavailability.
    pub fn disconnected() -> Self {
        Self { db: None }
    }

    fn database(&self) -> StoreResult<&Database> {
        self.db.as_ref().ok_or(StoreError::Unavailable)
    }
}

async fn try_connect(config: &StoreConfig, url: &str) -> Result<Client, mongodb::error::Error> {
    let mut options = ClientOptions::parse(url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    let client = Client::with_options(options)?;

    // Verify the connection with a lightweight round-trip
    client.list_database_names().await?;

    Ok(client)
}

#[async_trait]
impl DocumentStore for MongoStore {
    #[instrument(skip(self, document))]
    async fn insert(&self, collection: &str, document: Document) -> StoreResult<ObjectId> {
        let coll = self.database()?.collection::<Document>(collection);
        let result = coll.insert_one(document).await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Backend("inserted id was not an ObjectId".to_string()))
    }

    #[instrument(skip(self, filter))]
    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> StoreResult<Vec<Document>> {
        let coll = self.database()?.collection::<Document>(collection);

        let mut options = FindOptions::default();
        options.limit = limit;

        let cursor = coll.find(filter).with_options(options).await?;
        let documents = cursor.try_collect().await?;

        Ok(documents)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>> {
        let coll = self.database()?.collection::<Document>(collection);
        let document = coll.find_one(doc! { "_id": id }).await?;
        Ok(document)
    }

    #[instrument(skip(self))]
    async fn count(&self, collection: &str) -> StoreResult<u64> {
        let coll = self.database()?.collection::<Document>(collection);
        let count = coll.count_documents(doc! {}).await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn collection_names(&self) -> StoreResult<Vec<String>> {
        let names = self.database()?.list_collection_names().await?;
        Ok(names)
    }

    fn is_connected(&self) -> bool {
        self.db.is_some()
    }
}
