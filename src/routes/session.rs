//! Session endpoints.
//!
//! - GET /api/v1/session
//!   Reports whether a GitHub credential is available for this request and
//!   whether summaries are enabled. Never fails.
//!   Used by: sign-in screen to decide what to render
//!
//! - GET /api/v1/user
//!   Signed-in viewer's profile (login, name, avatar).
//!   Used by: header avatar

use axum::{Json, Router, extract::State, http::HeaderMap, routing::get};

use crate::auth::Credential;
use crate::error::Result;
use crate::models::{SessionInfo, UserProfile};
use crate::state::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/session", get(get_session))
        .route("/api/v1/user", get(get_user))
        .with_state(state)
}

async fn get_session(State(state): State<SharedState>, headers: HeaderMap) -> Json<SessionInfo> {
    let credential = Credential::from_headers(&headers, state.github_token());
    Json(SessionInfo {
        authenticated: credential.is_some(),
        source: credential.map(|c| c.source()),
        summary_enabled: state.summarizer.is_enabled(),
    })
}

async fn get_user(
    State(state): State<SharedState>,
    credential: Credential,
) -> Result<Json<UserProfile>> {
    let user = state.github.current_user(&credential).await?;
    Ok(Json(user))
}
