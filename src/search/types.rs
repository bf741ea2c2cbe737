//! Search Data Types
//!
//! Defines the validated filter model and the Data Transfer Objects (DTOs)
//! returned by the API endpoints.

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default platform set applied when the `platforms` parameter is absent.
pub const DEFAULT_PLATFORMS: [&str; 3] = ["instagram", "facebook", "twitter"];

/// Default page size applied when the `limit` parameter is absent.
pub const DEFAULT_LIMIT: u64 = 50;

/// Follower-count bounds, kept as a tagged range so that both ends survive
/// until translation. `None` means the bound is unset; a bound of `0` is
/// treated as unset as well (the query never constrains on it).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FollowerRange {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl FollowerRange {
    /// The effective lower bound, if one constrains the query.
    pub fn lower(&self) -> Option<u64> {
        self.min.filter(|v| *v > 0)
    }

    /// The effective upper bound, if one constrains the query.
    pub fn upper(&self) -> Option<u64> {
        self.max.filter(|v| *v > 0)
    }
}

/// A fully validated search filter, constructed fresh per request.
///
/// Built by `params::parse_filter` and consumed once by `query::build_query`;
/// never persisted or cached.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter {
    pub follower_range: FollowerRange,
    pub engagement_min: f64,
    pub platforms: Vec<String>,
    pub keywords: Option<Vec<String>>,
    pub skip: u64,
    pub limit: u64,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            follower_range: FollowerRange::default(),
            engagement_min: 0.0,
            platforms: DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect(),
            keywords: None,
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Response envelope returned by the search endpoint.
///
/// Result documents come back from the store with their internal `_id`
/// already projected out.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub status: String,
    pub status_code: u16,
    pub results: Vec<Document>,
}

impl SearchResponse {
    pub fn success(results: Vec<Document>) -> Self {
        Self {
            status: "success".to_string(),
            status_code: 200,
            results,
        }
    }
}

/// Echo of an inbound request, returned by the introspection endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntrospectResponse {
    pub method: String,
    pub path: String,
    pub query_params: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
}
