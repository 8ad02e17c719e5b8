use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::auth::Credential;
use crate::error::Result;
use crate::models::TreeResponse;
use crate::state::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/repos/{owner}/{repo}/tree", get(get_tree))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct TreeQuery {
    branch: Option<String>,
}

async fn get_tree(
    State(state): State<SharedState>,
    Path((owner, repo)): Path<(String, String)>,
    Query(query): Query<TreeQuery>,
    credential: Credential,
) -> Result<Json<TreeResponse>> {
    let tree = state
        .github
        .get_full_tree(&credential, &owner, &repo, query.branch.as_deref())
        .await?;
    Ok(Json(tree))
}
