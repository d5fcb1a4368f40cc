//! Orders domain wiring

use axum::Router;
use domain_orders::OrdersService;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    domain_orders::handlers::router(OrdersService::new(state.store.clone()))
}
