//! File content endpoints for the editor panel.
//!
//! - GET /api/v1/repos/{owner}/{repo}/contents?path=<path>&ref=<optional>
//!   Returns the decoded text and its revision token (`sha`).
//!
//! - PUT /api/v1/repos/{owner}/{repo}/contents { path, content, sha, message?, branch? }
//!   Commits the new text. `sha` must be the token from the last read; the
//!   response carries the token to use for the next save. A stale token
//!   yields 409.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::auth::Credential;
use crate::error::Result;
use crate::models::{FileContent, SaveFileRequest, SavedFile};
use crate::state::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route(
            "/api/v1/repos/{owner}/{repo}/contents",
            get(get_file).put(save_file),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct FileQuery {
    path: String,
    #[serde(rename = "ref")]
    git_ref: Option<String>,
}

async fn get_file(
    State(state): State<SharedState>,
    Path((owner, repo)): Path<(String, String)>,
    Query(query): Query<FileQuery>,
    credential: Credential,
) -> Result<Json<FileContent>> {
    let file = state
        .github
        .get_file(&credential, &owner, &repo, &query.path, query.git_ref.as_deref())
        .await?;
    Ok(Json(file))
}

async fn save_file(
    State(state): State<SharedState>,
    Path((owner, repo)): Path<(String, String)>,
    credential: Credential,
    Json(request): Json<SaveFileRequest>,
) -> Result<Json<SavedFile>> {
    let saved = state
        .github
        .save_file(&credential, &owner, &repo, &request)
        .await?;
    Ok(Json(saved))
}
