//! Store connectivity diagnostics

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::state::AppState;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

/// Connectivity report for the document store.
///
/// Every field is a plain status string so this endpoint can always answer
/// with 200, whatever state the store is in.
#[derive(Debug, Serialize, ToSchema)]
pub struct DiagnosticsReport {
    /// Always "running" when the process can answer at all
    pub backend: String,
    /// "connected", "not connected", or "error: ..." when listing fails
    pub database: String,
    /// Whether DATABASE_URL is set in the environment
    pub database_url: String,
    /// Whether DATABASE_NAME is set in the environment
    pub database_name: String,
    pub connection_status: String,
    /// Up to 10 collection names, empty when unreachable
    pub collections: Vec<String>,
}

/// Store connectivity diagnostic
#[utoipa::path(
    get,
    path = "/test",
    tag = "Diagnostics",
    responses(
        (status = 200, description = "Connectivity report", body = DiagnosticsReport)
    )
)]
#[instrument(skip(state))]
pub async fn test_store(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let mut report = DiagnosticsReport {
        backend: "running".to_string(),
        database: "not connected".to_string(),
        database_url: set_or_not(state.config.store.url.is_some()),
        database_name: set_or_not(state.config.store.database.is_some()),
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    };

    if state.store.is_connected() {
        report.connection_status = "connected".to_string();

        match state.store.collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_COLLECTIONS);
                report.collections = names;
                report.database = "connected".to_string();
            }
            Err(e) => {
                report.database = format!("error: {}", truncate(&e.to_string(), MAX_ERROR_CHARS));
            }
        }
    }

    Json(report)
}

fn set_or_not(set: bool) -> String {
    if set { "set" } else { "not set" }.to_string()
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(test_store))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::server::ServerConfig;
    use docstore::{DocumentStore, MemoryStore, MongoStore, StoreConfig};
    use http_body_util::BodyExt;
    use mongodb::bson::doc;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state_with(store: Arc<dyn DocumentStore>, store_config: StoreConfig) -> AppState {
        AppState {
            config: Config {
                server: ServerConfig::default(),
                store: store_config,
                environment: Environment::Development,
                cors_allowed_origins: None,
            },
            store,
        }
    }

    async fn report_for(state: AppState) -> serde_json::Value {
        let response = router(state)
            .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_connected_store_reports_collections() {
        let store = Arc::new(MemoryStore::new());
        store
            .insert("crackerproduct", doc! { "name": "a" })
            .await
            .unwrap();

        let report = report_for(state_with(
            store,
            StoreConfig::new("mongodb://localhost:27017", "crackers"),
        ))
        .await;

        assert_eq!(report["backend"], "running");
        assert_eq!(report["database"], "connected");
        assert_eq!(report["database_url"], "set");
        assert_eq!(report["database_name"], "set");
        assert_eq!(report["connection_status"], "connected");
        assert_eq!(report["collections"], serde_json::json!(["crackerproduct"]));
    }

    #[tokio::test]
    async fn test_degraded_store_still_answers_200() {
        let report = report_for(state_with(
            Arc::new(MongoStore::disconnected()),
            StoreConfig::unconfigured(),
        ))
        .await;

        assert_eq!(report["backend"], "running");
        assert_eq!(report["database"], "not connected");
        assert_eq!(report["database_url"], "not set");
        assert_eq!(report["database_name"], "not set");
        assert_eq!(report["connection_status"], "not connected");
        assert_eq!(report["collections"], serde_json::json!([]));
    }

    #[test]
    fn test_truncate_caps_at_char_count() {
        let long = "x".repeat(80);
        assert_eq!(truncate(&long, MAX_ERROR_CHARS).len(), 50);
        assert_eq!(truncate("short", MAX_ERROR_CHARS), "short");
    }
}
