use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use docstore::StoreError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("document store is unavailable")]
    Unavailable,

    #[error("store error: {0}")]
    Store(String),

    #[error("failed to encode product: {0}")]
    Encode(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable => CatalogError::Unavailable,
            StoreError::Backend(msg) => CatalogError::Store(msg),
        }
    }
}

impl From<mongodb::bson::ser::Error> for CatalogError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        CatalogError::Encode(err.to_string())
    }
}

/// Convert CatalogError to AppError for standardized error responses.
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => AppError::NotFound(format!("Product {id} not found")),
            CatalogError::Validation(e) => AppError::Validation(e),
            CatalogError::Unavailable => {
                AppError::StoreUnavailable("Document store is unavailable".to_string())
            }
            CatalogError::Store(msg) => AppError::Store(msg),
            CatalogError::Encode(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
