//! Catalog Domain
//!
//! Cracker products: listing with an optional category filter, creation,
//! retrieval by id, and lazy seeding of sample products when the collection
//! is empty.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use docstore::MemoryStore;
//! use domain_catalog::{CatalogService, handlers};
//!
//! let store = Arc::new(MemoryStore::new());
//! let service = CatalogService::new(store);
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod service;

pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use models::{COLLECTION, CatalogQuery, CrackerProduct, ProductCreated};
pub use service::CatalogService;
