use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{ValidatedJson, errors::ErrorResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::OrderResult;
use crate::models::{CustomerInfo, Order, OrderItem, OrderReceipt, OrdersQuery};
use crate::service::OrdersService;

/// OpenAPI documentation for the orders API.
#[derive(OpenApi)]
#[openapi(
    paths(create_order, list_orders),
    components(schemas(Order, OrderItem, CustomerInfo, OrdersQuery, OrderReceipt, ErrorResponse)),
    tags(
        (name = "Orders", description = "Customer order endpoints")
    )
)]
pub struct ApiDoc;

/// Create the orders router with all HTTP endpoints.
pub fn router(service: OrdersService) -> Router {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .with_state(Arc::new(service))
}

/// Place an order
#[utoipa::path(
    post,
    path = "",
    tag = "Orders",
    request_body = Order,
    responses(
        (status = 201, description = "Order received", body = OrderReceipt),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 503, description = "Document store unavailable", body = ErrorResponse)
    )
)]
async fn create_order(
    State(service): State<Arc<OrdersService>>,
    ValidatedJson(order): ValidatedJson<Order>,
) -> OrderResult<impl IntoResponse> {
    let id = service.place(order).await?;
    Ok((
        StatusCode::CREATED,
        Json(OrderReceipt {
            order_id: id.to_hex(),
            status: "received".to_string(),
        }),
    ))
}

/// List orders
#[utoipa::path(
    get,
    path = "",
    tag = "Orders",
    params(OrdersQuery),
    responses(
        (status = 200, description = "Serialized order list", body = Vec<Order>),
        (status = 503, description = "Document store unavailable", body = ErrorResponse)
    )
)]
async fn list_orders(
    State(service): State<Arc<OrdersService>>,
    Query(query): Query<OrdersQuery>,
) -> OrderResult<Json<Vec<serde_json::Value>>> {
    let orders = service.list(query.limit).await?;
    Ok(Json(orders))
}
