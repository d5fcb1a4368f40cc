use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use axum::Router;
use core_config::server::ServerConfig;
use std::io;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Assembles the application router.
///
/// - Swagger UI at `/swagger-ui`, raw OpenAPI document at
///   `/api-docs/openapi.json`
/// - `root` routes merged at the root path, `api` routes nested under `/api`
/// - JSON 404 fallback for unknown routes
/// - request tracing and the given CORS layer applied to everything,
///   documentation included
///
/// # Type Parameters
/// * `T` - a type implementing `utoipa::OpenApi` for the API documentation
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum_helpers::{create_app, create_permissive_cors_layer};
/// use utoipa::OpenApi;
///
/// #[derive(OpenApi)]
/// #[openapi(paths())]
/// struct ApiDoc;
///
/// let app = create_app::<ApiDoc>(
///     Router::new(),
///     Router::new(),
///     create_permissive_cors_layer(),
/// );
/// ```
pub fn create_app<T>(root: Router, api: Router, cors: CorsLayer) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(root)
        .nest("/api", api)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
}

/// Binds the listener and serves the router with graceful shutdown.
///
/// # Errors
/// Returns an error if the TCP listener fails to bind or the server fails
/// while running.
pub async fn serve(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}
