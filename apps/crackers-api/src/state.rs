//! Application state management

use std::sync::Arc;

use docstore::DocumentStore;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn DocumentStore>,
}
