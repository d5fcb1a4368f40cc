//! Collection schema descriptions for the external document viewer

use axum::{Json, Router, routing::get};
use domain_catalog::CrackerProduct;
use domain_orders::Order;
use schemars::schema_for;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// A named JSON Schema document.
#[derive(Debug, Serialize, ToSchema)]
pub struct SchemaEntry {
    pub name: String,
    #[schema(value_type = Object)]
    pub schema: Value,
}

/// JSON Schema descriptions of the stored document types
#[utoipa::path(
    get,
    path = "/schema",
    tag = "Diagnostics",
    responses(
        (status = 200, description = "Schemas of all stored document types", body = Vec<SchemaEntry>)
    )
)]
pub async fn get_schema() -> Json<Vec<SchemaEntry>> {
    Json(vec![
        SchemaEntry {
            name: "CrackerProduct".to_string(),
            schema: schema_for!(CrackerProduct).to_value(),
        },
        SchemaEntry {
            name: "Order".to_string(),
            schema: schema_for!(Order).to_value(),
        },
    ])
}

pub fn router() -> Router {
    Router::new().route("/schema", get(get_schema))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_schema_lists_both_document_types() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/schema")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        let entries = body.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["name"], "CrackerProduct");
        assert_eq!(entries[1]["name"], "Order");

        // Schemas must carry enough structure for the generic viewer
        let product_props = &entries[0]["schema"]["properties"];
        assert!(product_props.get("name").is_some());
        assert!(product_props.get("price").is_some());

        let order_props = &entries[1]["schema"]["properties"];
        assert!(order_props.get("items").is_some());
        assert!(order_props.get("customer").is_some());
    }
}
