//! Orders Domain
//!
//! Customer orders: write-once placement and listing. Status changes and
//! every other mutation happen outside this service, directly against the
//! store.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use docstore::MemoryStore;
//! use domain_orders::{OrdersService, handlers};
//!
//! let store = Arc::new(MemoryStore::new());
//! let service = OrdersService::new(store);
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

pub use error::{OrderError, OrderResult};
pub use handlers::ApiDoc;
pub use models::{COLLECTION, CustomerInfo, Order, OrderItem, OrderReceipt, OrdersQuery};
pub use service::OrdersService;
