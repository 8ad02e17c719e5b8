use std::sync::Arc;

use crate::github::GitHubClient;
use crate::openai::Summarizer;

/// Everything a request handler needs, built once at startup and never
/// mutated. Per-user state (credential, selected repository, revision token)
/// travels with each request instead.
pub struct AppState {
    pub github: GitHubClient,
    pub summarizer: Summarizer,
    github_token: Option<String>,
}

impl AppState {
    pub fn new(github: GitHubClient, summarizer: Summarizer, github_token: Option<String>) -> Self {
        Self {
            github,
            summarizer,
            github_token: github_token.filter(|t| !t.is_empty()),
        }
    }

    /// Server-wide fallback token, used when a request carries none.
    pub fn github_token(&self) -> Option<&str> {
        self.github_token.as_deref()
    }
}

pub type SharedState = Arc<AppState>;
