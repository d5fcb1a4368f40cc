use axum::http::{HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates a CORS layer restricted to an explicit origin allow-list.
///
/// Configured with:
/// - the given allowed origins
/// - common HTTP methods (GET, POST, PUT, DELETE, PATCH, OPTIONS)
/// - common headers (Content-Type, Authorization, Accept)
/// - credentials allowed
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins.to_vec()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Creates a permissive CORS layer: any origin, any method, any header.
///
/// This is the service default when no allow-list is configured.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
