//! In-process implementation of the DocumentStore trait.

use async_trait::async_trait;
use mongodb::bson::{Bson, Document, oid::ObjectId};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::store::DocumentStore;

/// In-memory document store for tests.
///
/// Collections are ordered vectors, so listing preserves insertion order the
/// way MongoDB natural order does. Filters are matched by exact field
/// equality, which covers everything this service queries with.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, value)| document.get(key) == Some(value))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, mut document: Document) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        document.insert("_id", id);

        let mut collections = self.collections.write().expect("memory store lock poisoned");
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id)
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().expect("memory store lock poisoned");

        let mut found: Vec<Document> = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|d| matches(d, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(limit) = limit {
            found.truncate(limit.max(0) as usize);
        }

        Ok(found)
    }

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().expect("memory store lock poisoned");

        let found = collections.get(collection).and_then(|documents| {
            documents
                .iter()
                .find(|d| d.get("_id") == Some(&Bson::ObjectId(id)))
                .cloned()
        });

        Ok(found)
    }

    async fn count(&self, collection: &str) -> StoreResult<u64> {
        let collections = self.collections.read().expect("memory store lock poisoned");
        Ok(collections.get(collection).map_or(0, |d| d.len() as u64))
    }

    async fn collection_names(&self) -> StoreResult<Vec<String>> {
        let collections = self.collections.read().expect("memory store lock poisoned");
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn is_connected(&self) -> bool {
        true
    }
}
