//! Service Error Taxonomy
//!
//! Maps every failure the request pipeline can produce onto an HTTP response.
//! Validation failures and malformed queries are client errors (400);
//! infrastructure faults in the data store are server errors (500).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced to HTTP clients by the search endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A query parameter failed validation before any database access.
    #[error("{0}")]
    InvalidParameter(String),

    /// The data store rejected the query itself (malformed predicate,
    /// serialization failure). Carries the driver's message verbatim.
    #[error("{0}")]
    QueryExecution(String),

    /// The data store could not be reached (connectivity, server selection,
    /// authentication). Carries the driver's message verbatim.
    #[error("{0}")]
    StoreUnavailable(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Query(message) => ApiError::QueryExecution(message),
            StoreError::Unavailable(message) => ApiError::StoreUnavailable(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidParameter(_) | ApiError::QueryExecution(_) => StatusCode::BAD_REQUEST,
            ApiError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
