//! Crackers Shop API - REST server

use std::sync::Arc;

use axum_helpers::{create_app, serve};
use core_config::tracing::{init_tracing, install_color_eyre};
use docstore::{DocumentStore, MongoStore};
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // The store connects with retry but never blocks startup on failure;
    // data endpoints report unavailability until a connection exists.
    let store: Arc<dyn DocumentStore> = Arc::new(MongoStore::connect(&config.store).await);
    if store.is_connected() {
        info!("Document store connected");
    } else {
        warn!("Running without a document store; data endpoints will report unavailability");
    }

    let state = AppState { config, store };

    let app = create_app::<openapi::ApiDoc>(
        api::root_routes(state.clone()),
        api::api_routes(&state),
        state.config.cors_layer(),
    );

    info!(
        "Starting Crackers Shop API on {}",
        state.config.server.address()
    );
    serve(app, &state.config.server).await?;

    info!("Crackers Shop API shutdown complete");
    Ok(())
}
