use axum::{Json, Router, extract::State, routing::get};

use crate::auth::Credential;
use crate::error::Result;
use crate::models::RepoSummary;
use crate::state::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/repos", get(list_repos))
        .with_state(state)
}

async fn list_repos(
    State(state): State<SharedState>,
    credential: Credential,
) -> Result<Json<Vec<RepoSummary>>> {
    let repos = state.github.list_repos(&credential).await?;
    Ok(Json(repos))
}
