//! Server infrastructure module.
//!
//! Provides app assembly with OpenAPI documentation, serving with graceful
//! shutdown, and the shutdown signal handler.

pub mod app;
pub mod shutdown;

pub use app::{create_app, serve};
pub use shutdown::shutdown_signal;
