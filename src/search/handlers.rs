//! Search HTTP Handlers
//!
//! Axum handlers and router for the service's three endpoints: the welcome
//! page, the profile search, and the request-introspection echo.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::extract::{Extension, Query};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::params::parse_filter;
use super::query::build_query;
use super::types::{IntrospectResponse, SearchResponse};
use crate::error::ApiError;
use crate::store::ProfileStore;

/// Build the service router around a profile store.
pub fn router(store: Arc<dyn ProfileStore>) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/search", get(handle_search))
        .route("/introspect", get(handle_introspect))
        .layer(Extension(store))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn handle_index() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Welcome to the Profile Search API!")
}

/// `GET /search` — validate parameters, translate them into a predicate, and
/// execute it against the profile store.
pub async fn handle_search(
    Query(params): Query<HashMap<String, String>>,
    Extension(store): Extension<Arc<dyn ProfileStore>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let filter = parse_filter(&params)?;
    let query = build_query(&filter);
    tracing::debug!("Executing profile search: {:?}", query.predicate);

    let results = store.find_profiles(query).await.map_err(|e| {
        tracing::error!("Profile search failed: {}", e);
        ApiError::from(e)
    })?;

    tracing::debug!("Search returned {} profiles", results.len());
    Ok(Json(SearchResponse::success(results)))
}

/// `GET /introspect` — echo the inbound request for debugging.
pub async fn handle_introspect(
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(query_params): Query<BTreeMap<String, String>>,
) -> Json<IntrospectResponse> {
    let headers: BTreeMap<String, String> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                value.to_str().unwrap_or("<non-utf8>").to_string(),
            )
        })
        .collect();

    Json(IntrospectResponse {
        method: method.to_string(),
        path: uri.path().to_string(),
        query_params,
        headers,
    })
}
