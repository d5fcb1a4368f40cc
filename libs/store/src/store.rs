use async_trait::async_trait;
use mongodb::bson::{Document, oid::ObjectId};

use crate::error::StoreResult;

/// Persistence port for named collections of BSON documents.
///
/// Injected into the routing layer at startup, never held as a global, so
/// tests can substitute [`crate::MemoryStore`] anywhere the trait is
/// accepted. Collection names are explicit arguments; each domain declares
/// its own collection constant.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document and return the store-assigned ObjectId.
    async fn insert(&self, collection: &str, document: Document) -> StoreResult<ObjectId>;

    /// Find documents matching `filter` (exact field equality), up to `limit`
    /// when given, in natural (insertion) order.
    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> StoreResult<Vec<Document>>;

    /// Find a single document by its ObjectId. `Ok(None)` means the id is
    /// well-formed but matches nothing.
    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>>;

    /// Count all documents in a collection.
    async fn count(&self, collection: &str) -> StoreResult<u64>;

    /// List the collection names in the database.
    async fn collection_names(&self) -> StoreResult<Vec<String>>;

    /// Whether a live database connection exists. Diagnostics only; any
    /// operation may still fail after this returns true.
    fn is_connected(&self) -> bool;
}
