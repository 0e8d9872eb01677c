use serde::Serialize;

use crate::models::listing::JobListing;
use crate::models::query::JobQuery;
use crate::providers::ProviderAttempt;

/// Value of `source` when listings come from the synthesizer.
pub const SYNTHETIC_SOURCE: &str = "synthetic";

/// Where a result set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSource {
    Provider { name: String, filters_location: bool },
    Synthetic,
}

/// JSON envelope returned by `/search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub source: String,
    pub page: i64,
    pub count: usize,
    pub data: Vec<JobListing>,
    pub attempts: Vec<ProviderAttempt>,
}

/// Apply post-filters and wrap listings in the response envelope.
///
/// Only filterable provider results are narrowed by location; synthetic
/// listings already carry the requested location. An empty set after
/// filtering is returned as-is.
pub fn aggregate(
    query: &JobQuery,
    source: ResultSource,
    listings: Vec<JobListing>,
    attempts: Vec<ProviderAttempt>,
) -> SearchResponse {
    let (source, data) = match source {
        ResultSource::Provider {
            name,
            filters_location: true,
        } => match query.location.as_deref() {
            Some(location) => {
                let before = listings.len();
                let kept = filter_by_location(listings, location);
                tracing::debug!(
                    "Location filter '{location}' kept {} of {before} listings from '{name}'",
                    kept.len()
                );
                (name, kept)
            }
            None => (name, listings),
        },
        ResultSource::Provider { name, .. } => (name, listings),
        ResultSource::Synthetic => (SYNTHETIC_SOURCE.to_string(), listings),
    };

    SearchResponse {
        source,
        page: query.page,
        count: data.len(),
        data,
        attempts,
    }
}

/// Keep listings whose location contains `location`, ignoring case.
pub fn filter_by_location(listings: Vec<JobListing>, location: &str) -> Vec<JobListing> {
    let needle = location.trim().to_lowercase();
    if needle.is_empty() {
        return listings;
    }
    listings
        .into_iter()
        .filter(|l| l.location_text().to_lowercase().contains(&needle))
        .collect()
}
