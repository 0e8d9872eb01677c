use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};

use crate::error::AppError;
use crate::models::query::{JobQuery, SearchParams};
use crate::search::SearchService;
use crate::search::aggregate::SearchResponse;

/// GET /search
///
/// Validates the query string, then answers from the first provider with
/// listings or from the synthesizer. The only error is a missing query.
pub async fn search(
    State(service): State<Arc<SearchService>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let query = JobQuery::from_params(params)?;
    tracing::info!(
        "Search '{}' location={:?} page={} category={:?}",
        query.text,
        query.location,
        query.page,
        query.category
    );
    Ok(Json(service.search(&query).await))
}
