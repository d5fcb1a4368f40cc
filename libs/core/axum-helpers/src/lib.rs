//! # Axum Helpers
//!
//! Shared HTTP plumbing for the Crackers Shop services.
//!
//! ## Modules
//!
//! - **[`errors`]**: structured error responses with error codes
//! - **[`extractors`]**: custom extractors (ObjectId path, validated JSON)
//! - **[`middleware`]**: CORS layers
//! - **[`server`]**: app assembly, serving, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{ObjectIdPath, ValidatedJson};

// Re-export middleware
pub use middleware::{create_cors_layer, create_permissive_cors_layer};

// Re-export server helpers
pub use server::{create_app, serve, shutdown_signal};
