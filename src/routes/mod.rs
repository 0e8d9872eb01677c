pub mod health;
pub mod search;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::search::SearchService;

pub fn router(service: Arc<SearchService>) -> Router {
    let api: Router<Arc<SearchService>> = Router::new().route("/search", get(search::search));

    Router::new()
        .route("/healthz", get(health::healthz))
        .merge(api.clone())
        .nest("/api/v1", api)
        .with_state(service)
}
