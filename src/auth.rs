//! Request-scoped GitHub credential.
//!
//! The browser session passes its token as `Authorization: Bearer <token>`
//! (GitHub's `token <token>` form is accepted too). Requests without one fall
//! back to the token the server was started with, if any.

use std::fmt;

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};

use crate::error::AppError;
use crate::models::CredentialSource;
use crate::state::SharedState;

#[derive(Clone)]
pub struct Credential {
    token: String,
    source: CredentialSource,
}

impl Credential {
    pub fn new(token: impl Into<String>, source: CredentialSource) -> Self {
        Self {
            token: token.into(),
            source,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }

    pub fn from_headers(headers: &HeaderMap, fallback: Option<&str>) -> Option<Self> {
        let from_header = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| {
                value
                    .strip_prefix("Bearer ")
                    .or_else(|| value.strip_prefix("token "))
            })
            .map(str::trim)
            .filter(|token| !token.is_empty());

        match (from_header, fallback) {
            (Some(token), _) => Some(Self::new(token, CredentialSource::Header)),
            (None, Some(token)) if !token.is_empty() => {
                Some(Self::new(token, CredentialSource::Config))
            }
            _ => None,
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

impl FromRequestParts<SharedState> for Credential {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        Credential::from_headers(&parts.headers, state.github_token())
            .ok_or_else(|| AppError::Unauthorized("GitHub access token not configured".to_string()))
    }
}
