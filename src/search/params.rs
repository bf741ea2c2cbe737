//! Parameter Validator
//!
//! Converts the raw query-string mapping of a `/search` request into a
//! validated `SearchFilter`, or fails with `ApiError::InvalidParameter`
//! before any database access happens. Pure function, no side effects.
//!
//! Range and cross-field violations carry a targeted message; anything that
//! simply fails to parse falls back to the generic "Invalid parameters".

use std::collections::HashMap;

use super::types::{FollowerRange, SearchFilter};
use crate::error::ApiError;

const GENERIC_MESSAGE: &str = "Invalid parameters";

/// Parse and validate the raw query parameters of a search request.
///
/// Absent keys are legal and fall back to the `SearchFilter` defaults.
pub fn parse_filter(params: &HashMap<String, String>) -> Result<SearchFilter, ApiError> {
    let mut filter = SearchFilter::default();

    let fmin = parse_integer(params, "fmin")?;
    let fmax = parse_integer(params, "fmax")?;
    if fmin.is_some_and(|v| v < 0) || fmax.is_some_and(|v| v < 0) {
        return Err(invalid("fmin and fmax must not be negative"));
    }
    // fmax == 0 means "no upper bound", so an arbitrarily large fmin is fine.
    if let (Some(min), Some(max)) = (fmin, fmax) {
        if max > 0 && min > max {
            return Err(invalid("fmax must not be less than fmin"));
        }
    }
    filter.follower_range = FollowerRange {
        min: fmin.map(|v| v as u64),
        max: fmax.map(|v| v as u64),
    };

    if let Some(raw) = params.get("engagement") {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| invalid(GENERIC_MESSAGE))?;
        if !value.is_finite() {
            return Err(invalid(GENERIC_MESSAGE));
        }
        if value < 0.0 {
            return Err(invalid("engagement must not be negative"));
        }
        filter.engagement_min = value;
    }

    if let Some(raw) = params.get("platforms") {
        filter.platforms = split_tokens(raw);
    }

    // A present-but-blank keywords value is treated the same as an absent one.
    match params.get("keywords") {
        Some(raw) if !raw.trim().is_empty() => filter.keywords = Some(split_tokens(raw)),
        _ => {}
    }

    let skip = parse_integer(params, "skip")?;
    let limit = parse_integer(params, "limit")?;
    if skip.is_some_and(|v| v < 0) || limit.is_some_and(|v| v < 0) {
        return Err(invalid("skip and limit must not be negative"));
    }
    if let Some(skip) = skip {
        filter.skip = skip as u64;
    }
    if let Some(limit) = limit {
        filter.limit = limit as u64;
    }

    Ok(filter)
}

/// Comma-separated list -> trimmed, lower-cased tokens.
///
/// Empty tokens (e.g. from "a,,b") are retained literally; the caller decides
/// whether the whole value counts as present.
fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(',').map(|t| t.trim().to_lowercase()).collect()
}

fn parse_integer(params: &HashMap<String, String>, key: &str) -> Result<Option<i64>, ApiError> {
    match params.get(key) {
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| invalid(GENERIC_MESSAGE)),
        None => Ok(None),
    }
}

fn invalid(message: &str) -> ApiError {
    ApiError::InvalidParameter(message.to_string())
}
