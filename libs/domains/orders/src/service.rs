//! Orders service - business logic layer.

use std::sync::Arc;

use docstore::{DocumentStore, doc_to_json};
use mongodb::bson::{doc, oid::ObjectId, to_document};
use serde_json::Value;
use tracing::{info, instrument};
use validator::Validate;

use crate::error::OrderResult;
use crate::models::{COLLECTION, Order};

/// Order operations over an injected document store.
pub struct OrdersService {
    store: Arc<dyn DocumentStore>,
}

impl OrdersService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Validate and persist an order, returning the assigned id.
    ///
    /// Orders are write-once here; status transitions happen outside this
    /// service.
    #[instrument(skip(self, order), fields(items = order.items.len()))]
    pub async fn place(&self, order: Order) -> OrderResult<ObjectId> {
        order.validate()?;

        let document = to_document(&order)?;
        let id = self.store.insert(COLLECTION, document).await?;

        info!(order_id = %id, total_amount = order.total_amount, "Order placed");
        Ok(id)
    }

    /// List orders in insertion order, up to `limit`.
    #[instrument(skip(self))]
    pub async fn list(&self, limit: i64) -> OrderResult<Vec<Value>> {
        let documents = self
            .store
            .find_many(COLLECTION, doc! {}, Some(limit))
            .await?;

        Ok(documents.into_iter().map(doc_to_json).collect())
    }
}

impl Clone for OrdersService {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
