use thiserror::Error;

/// Error type for document store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No database connection exists; the adapter is in degraded mode.
    #[error("document store is unavailable")]
    Unavailable,

    /// The backend reported an error for an otherwise well-formed operation.
    #[error("store backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}
