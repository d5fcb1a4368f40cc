//! API routes module

pub mod crackers;
pub mod diagnostics;
pub mod meta;
pub mod orders;
pub mod schema;

use axum::Router;

use crate::state::AppState;

/// Routes served at the application root.
pub fn root_routes(state: AppState) -> Router {
    Router::new()
        .merge(meta::root_router())
        .merge(diagnostics::router(state))
        .merge(schema::router())
}

/// Routes nested under `/api`.
pub fn api_routes(state: &AppState) -> Router {
    Router::new()
        .merge(meta::hello_router())
        .nest("/crackers", crackers::router(state))
        .nest("/orders", orders::router(state))
}
