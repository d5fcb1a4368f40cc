//! Document store for the Crackers Shop API.
//!
//! The [`DocumentStore`] trait is the persistence port: named collections of
//! BSON documents keyed by ObjectId. [`MongoStore`] is the MongoDB adapter,
//! with a degraded mode that reports unavailability instead of crashing when
//! no database can be reached. [`MemoryStore`] is an in-process
//! implementation for tests.
//!
//! # Usage
//!
//! ```rust,no_run
//! use docstore::{DocumentStore, MongoStore, StoreConfig};
//! use core_config::FromEnv;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoreConfig::from_env()?;
//! let store = MongoStore::connect(&config).await;
//! if store.is_connected() {
//!     let count = store.count("crackerproduct").await?;
//!     println!("{count} products");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod memory;
pub mod mongo;
pub mod retry;
pub mod serialize;
pub mod store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use serialize::doc_to_json;
pub use store::DocumentStore;
