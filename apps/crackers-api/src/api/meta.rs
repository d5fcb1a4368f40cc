//! Liveness and greeting endpoints

use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

/// A one-line status or greeting message.
#[derive(Debug, Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

/// Liveness message
#[utoipa::path(
    get,
    path = "/",
    tag = "Meta",
    responses(
        (status = 200, description = "Service is running", body = Message)
    )
)]
pub async fn read_root() -> Json<Message> {
    Json(Message {
        message: "Crackers Shop API is running".to_string(),
    })
}

/// Static greeting
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "Meta",
    responses(
        (status = 200, description = "Greeting", body = Message)
    )
)]
pub async fn hello() -> Json<Message> {
    Json(Message {
        message: "Hello from the backend API!".to_string(),
    })
}

pub fn root_router() -> Router {
    Router::new().route("/", get(read_root))
}

pub fn hello_router() -> Router {
    Router::new().route("/hello", get(hello))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn body_json(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_liveness_message() {
        let response = root_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response.into_body()).await;
        assert_eq!(body["message"], "Crackers Shop API is running");
    }

    #[tokio::test]
    async fn test_hello_greeting() {
        let response = hello_router()
            .oneshot(
                Request::builder()
                    .uri("/hello")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response.into_body()).await;
        assert_eq!(body["message"], "Hello from the backend API!");
    }
}
