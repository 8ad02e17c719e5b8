//! API route handlers - maps HTTP endpoints to upstream calls.
//!
//! Each submodule defines routes for a feature area:
//! - `session`: Credential presence and viewer profile
//! - `repos`: Repository list (GET /api/v1/repos)
//! - `tree`: Recursive file tree for the sidebar
//! - `contents`: File read and save for the editor
//! - `summary`: AI-generated repository summary

pub mod contents;
pub mod repos;
pub mod session;
pub mod summary;
pub mod tree;

use axum::Router;

use crate::state::SharedState;

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .merge(session::routes(state.clone()))
        .merge(repos::routes(state.clone()))
        .merge(tree::routes(state.clone()))
        .merge(contents::routes(state.clone()))
        .merge(summary::routes(state))
}
