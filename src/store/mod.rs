//! Profile Store Module
//!
//! The data-access layer behind the search endpoint.
//!
//! ## Core Concepts
//! - **Seam**: `ProfileStore` abstracts query execution so the HTTP layer can
//!   be tested against an in-memory double.
//! - **Execution**: `MongoProfileStore` runs the translated predicate against
//!   the `profiles` collection of the `aggregation` database.
//! - **Classification**: driver failures are split into query errors (client
//!   fault) and availability errors (infrastructure fault).

pub mod config;
pub mod mongo;

use async_trait::async_trait;
use mongodb::bson::Document;
use thiserror::Error;

use crate::search::query::ProfileQuery;

/// Failures surfaced by a profile store.
///
/// Both variants carry the underlying driver message verbatim; the HTTP layer
/// decides the status code (400 for `Query`, 500 for `Unavailable`).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store rejected the query (malformed predicate, bad document).
    #[error("{0}")]
    Query(String),

    /// The store could not be reached or refused the connection.
    #[error("{0}")]
    Unavailable(String),
}

/// Executes translated queries against the profile collection.
///
/// Implementations return matching documents with the internal identifier
/// field already excluded, windowed by the query's skip/limit.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_profiles(&self, query: ProfileQuery) -> Result<Vec<Document>, StoreError>;
}

#[cfg(test)]
mod tests;
