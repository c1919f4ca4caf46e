use axum::{Json, extract::State};
use std::sync::Arc;
use std::time::Instant;

use crate::pipeline::Pipeline;
use crate::query::SearchForm;

use super::models::{KeywordSection, SearchResponse};

/// Runs the submitted form. Per-keyword failures are reported inside the
/// response, so the request itself always succeeds.
pub async fn search_handler(
    State(pipeline): State<Arc<Pipeline>>,
    Json(form): Json<SearchForm>,
) -> Json<SearchResponse> {
    let start = Instant::now();

    let sections: Vec<KeywordSection> = pipeline
        .run_all(&form)
        .await
        .into_iter()
        .map(KeywordSection::from)
        .collect();

    Json(SearchResponse {
        sections,
        processing_time_ms: start.elapsed().as_millis(),
    })
}
