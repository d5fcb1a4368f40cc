//! Type-safe error codes for API responses.
//!
//! Single source of truth for the error codes used across the service. Each
//! code carries a string identifier for clients (e.g. "VALIDATION_ERROR"), an
//! integer code for logging and monitoring (e.g. 1001), and a default
//! human-readable message.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Document id in the path is not a valid ObjectId hex string
    InvalidDocumentId,

    /// JSON extraction from the request body failed
    JsonExtraction,

    /// Requested document was not found
    NotFound,

    /// An unexpected internal server error occurred
    InternalError,

    // Store errors (2000-2999)
    /// The document store is not connected
    StoreUnavailable,

    /// The document store reported an error
    StoreError,
}

impl ErrorCode {
    /// String identifier for client consumption.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidDocumentId => "INVALID_DOCUMENT_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::StoreError => "STORE_ERROR",
        }
    }

    /// Integer code for structured logs and metrics.
    ///
    /// Ranges: 1000-1999 client errors, 2000-2999 store errors.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidDocumentId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::StoreUnavailable => 2001,
            Self::StoreError => 2002,
        }
    }

    /// Default user-facing message; handlers may override with specifics.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidDocumentId => "Invalid document id format",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::InternalError => "An internal server error occurred",
            Self::StoreUnavailable => "Document store is unavailable",
            Self::StoreError => "Document store error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
