use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use docstore::StoreError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("document store is unavailable")]
    Unavailable,

    #[error("store error: {0}")]
    Store(String),

    #[error("failed to encode order: {0}")]
    Encode(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<StoreError> for OrderError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable => OrderError::Unavailable,
            StoreError::Backend(msg) => OrderError::Store(msg),
        }
    }
}

impl From<mongodb::bson::ser::Error> for OrderError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        OrderError::Encode(err.to_string())
    }
}

/// Convert OrderError to AppError for standardized error responses.
impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Validation(e) => AppError::Validation(e),
            OrderError::Unavailable => {
                AppError::StoreUnavailable("Document store is unavailable".to_string())
            }
            OrderError::Store(msg) => AppError::Store(msg),
            OrderError::Encode(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
