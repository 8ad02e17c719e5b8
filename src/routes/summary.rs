use axum::{Json, Router, extract::State, routing::post};

use crate::error::Result;
use crate::models::{SummaryRequest, SummaryResponse};
use crate::state::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/summary", post(generate_summary))
        .with_state(state)
}

async fn generate_summary(
    State(state): State<SharedState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>> {
    let summary = state
        .summarizer
        .summarize(&request.repo_name, request.repo_desc.as_deref().unwrap_or(""))
        .await?;
    Ok(Json(SummaryResponse { summary }))
}
