use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{ObjectIdPath, ValidatedJson, errors::ErrorResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{CatalogQuery, CrackerProduct, ProductCreated};
use crate::service::CatalogService;

/// OpenAPI documentation for the catalog API.
#[derive(OpenApi)]
#[openapi(
    paths(list_crackers, create_cracker, get_cracker),
    components(schemas(CrackerProduct, CatalogQuery, ProductCreated, ErrorResponse)),
    tags(
        (name = "Catalog", description = "Cracker product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints.
pub fn router(service: CatalogService) -> Router {
    Router::new()
        .route("/", get(list_crackers).post(create_cracker))
        .route("/{id}", get(get_cracker))
        .with_state(Arc::new(service))
}

/// List products, optionally filtered by category
#[utoipa::path(
    get,
    path = "",
    tag = "Catalog",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Serialized product list", body = Vec<CrackerProduct>),
        (status = 503, description = "Document store unavailable", body = ErrorResponse)
    )
)]
async fn list_crackers(
    State(service): State<Arc<CatalogService>>,
    Query(query): Query<CatalogQuery>,
) -> CatalogResult<Json<Vec<serde_json::Value>>> {
    let products = service.list(query.category).await?;
    Ok(Json(products))
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = "Catalog",
    request_body = CrackerProduct,
    responses(
        (status = 201, description = "Product created", body = ProductCreated),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 503, description = "Document store unavailable", body = ErrorResponse)
    )
)]
async fn create_cracker(
    State(service): State<Arc<CatalogService>>,
    ValidatedJson(product): ValidatedJson<CrackerProduct>,
) -> CatalogResult<impl IntoResponse> {
    let id = service.create(product).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProductCreated { id: id.to_hex() }),
    ))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Catalog",
    params(
        ("id" = String, Path, description = "Product ObjectId as 24-char hex")
    ),
    responses(
        (status = 200, description = "Serialized product", body = CrackerProduct),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No such product", body = ErrorResponse),
        (status = 503, description = "Document store unavailable", body = ErrorResponse)
    )
)]
async fn get_cracker(
    State(service): State<Arc<CatalogService>>,
    ObjectIdPath(id): ObjectIdPath,
) -> CatalogResult<Json<serde_json::Value>> {
    let product = service.get(id).await?;
    Ok(Json(product))
}
