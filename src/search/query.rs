//! Query Translator
//!
//! Maps a validated `SearchFilter` into a BSON predicate over the profile
//! collection plus a skip/limit pagination directive. The translator never
//! executes the query; execution belongs to the `store` module.

use mongodb::bson::{doc, Document};

use super::types::SearchFilter;

/// A translated query: the predicate handed to the store, plus pagination.
///
/// No sort is attached; results follow the collection's natural order, so
/// skip/limit windows are only as stable as the backing store's iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileQuery {
    pub predicate: Document,
    pub skip: u64,
    pub limit: i64,
}

/// Build the collection predicate and pagination directive for a filter.
pub fn build_query(filter: &SearchFilter) -> ProfileQuery {
    let mut predicate = doc! {
        "engagement_rate": { "$gte": filter.engagement_min },
    };

    // Both follower bounds land in one range document on `followers`.
    let mut followers = Document::new();
    if let Some(min) = filter.follower_range.lower() {
        followers.insert("$gte", min as i64);
    }
    if let Some(max) = filter.follower_range.upper() {
        followers.insert("$lte", max as i64);
    }
    if !followers.is_empty() {
        predicate.insert("followers", followers);
    }

    predicate.insert("platform", doc! { "$in": filter.platforms.clone() });

    if let Some(keywords) = &filter.keywords {
        predicate.insert("keywords", doc! { "$in": keywords.clone() });
    }

    ProfileQuery {
        predicate,
        skip: filter.skip,
        limit: filter.limit as i64,
    }
}
