//! MongoDB Profile Store
//!
//! Executes translated queries against the `profiles` collection of the
//! `aggregation` database. Queries run with the query's skip/limit window and
//! a projection that drops the internal `_id` field. No retries; driver
//! failures are classified and passed straight back to the caller.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::error::ErrorKind;
use mongodb::options::FindOptions;
use mongodb::{Client, Collection};

use super::config::StoreConfig;
use super::{ProfileStore, StoreError};
use crate::search::query::ProfileQuery;

const DATABASE_NAME: &str = "aggregation";
const COLLECTION_NAME: &str = "profiles";

pub struct MongoProfileStore {
    collection: Collection<Document>,
}

impl MongoProfileStore {
    /// Create a store for the configured deployment.
    ///
    /// The driver connects lazily, so a bad host only surfaces on the first
    /// query, as an `Unavailable` error.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(config.connection_uri())
            .await
            .map_err(classify)?;
        let collection = client
            .database(DATABASE_NAME)
            .collection::<Document>(COLLECTION_NAME);

        tracing::info!(
            "Connected to profile store at {}:{}",
            config.host,
            config.port
        );
        Ok(Self { collection })
    }
}

#[async_trait]
impl ProfileStore for MongoProfileStore {
    async fn find_profiles(&self, query: ProfileQuery) -> Result<Vec<Document>, StoreError> {
        let options = FindOptions::builder()
            .projection(doc! { "_id": 0 })
            .skip(query.skip)
            .limit(query.limit)
            .build();

        let cursor = self
            .collection
            .find(query.predicate, options)
            .await
            .map_err(classify)?;

        cursor.try_collect().await.map_err(classify)
    }
}

/// Split driver failures into client-visible query errors and
/// infrastructure faults.
fn classify(err: mongodb::error::Error) -> StoreError {
    match &*err.kind {
        ErrorKind::Io(_)
        | ErrorKind::ServerSelection { .. }
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::Authentication { .. }
        | ErrorKind::ConnectionPoolCleared { .. } => StoreError::Unavailable(err.to_string()),
        _ => StoreError::Query(err.to_string()),
    }
}
