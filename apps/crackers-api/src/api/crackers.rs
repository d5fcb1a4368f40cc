//! Catalog domain wiring

use axum::Router;
use domain_catalog::CatalogService;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    domain_catalog::handlers::router(CatalogService::new(state.store.clone()))
}
