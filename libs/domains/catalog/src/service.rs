//! Catalog service - business logic layer.

use std::sync::Arc;

use docstore::{DocumentStore, doc_to_json};
use mongodb::bson::{Document, doc, oid::ObjectId, to_document};
use serde_json::Value;
use tracing::{info, instrument};
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{COLLECTION, CrackerProduct};
use crate::seed;

/// Catalog operations over an injected document store.
pub struct CatalogService {
    store: Arc<dyn DocumentStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// List products, optionally filtered by exact category match.
    ///
    /// Seeds the sample products first if the collection is empty. When the
    /// store is degraded the seeding pass is skipped silently and the list
    /// itself reports unavailability.
    #[instrument(skip(self))]
    pub async fn list(&self, category: Option<String>) -> CatalogResult<Vec<Value>> {
        match self.seed_if_empty().await {
            Ok(()) | Err(CatalogError::Unavailable) => {}
            Err(e) => return Err(e),
        }

        let filter = match category {
            Some(category) => doc! { "category": category },
            None => Document::new(),
        };

        let documents = self.store.find_many(COLLECTION, filter, None).await?;
        Ok(documents.into_iter().map(doc_to_json).collect())
    }

    /// Validate and persist a product, returning the assigned id.
    #[instrument(skip(self, product), fields(category = %product.category))]
    pub async fn create(&self, product: CrackerProduct) -> CatalogResult<ObjectId> {
        product.validate()?;

        let document = to_document(&product)?;
        let id = self.store.insert(COLLECTION, document).await?;

        info!(product_id = %id, "Product created");
        Ok(id)
    }

    /// Fetch a single product by id, serialized for the HTTP layer.
    #[instrument(skip(self))]
    pub async fn get(&self, id: ObjectId) -> CatalogResult<Value> {
        let document = self
            .store
            .find_by_id(COLLECTION, id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.to_hex()))?;

        Ok(doc_to_json(document))
    }

    /// Insert the sample products if the collection is empty.
    ///
    /// Count-then-insert: concurrent first requests could race and
    /// double-seed. Accepted for this service's traffic.
    async fn seed_if_empty(&self) -> CatalogResult<()> {
        if self.store.count(COLLECTION).await? > 0 {
            return Ok(());
        }

        info!("Catalog is empty, seeding sample products");
        for product in seed::sample_products() {
            let document = to_document(&product)?;
            self.store.insert(COLLECTION, document).await?;
        }

        Ok(())
    }
}

impl Clone for CatalogService {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
