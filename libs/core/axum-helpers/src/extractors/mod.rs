//! Custom extractors for Axum handlers.
//!
//! These reduce boilerplate and standardize error handling across the API.

pub mod object_id_path;
pub mod validated_json;

pub use object_id_path::ObjectIdPath;
pub use validated_json::ValidatedJson;
