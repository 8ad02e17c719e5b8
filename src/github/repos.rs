use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::auth::Credential;
use crate::error::Result;
use crate::github::client::{GitHubClient, repo_path};
use crate::models::{OwnerInfo, RepoSummary, UserProfile};

/// Subset of the GitHub repository object we display.
#[derive(Debug, Deserialize)]
struct RepoRecord {
    id: u64,
    name: String,
    full_name: String,
    description: Option<String>,
    #[serde(default)]
    default_branch: Option<String>,
    html_url: String,
    #[serde(default)]
    private: bool,
    owner: OwnerInfo,
    updated_at: Option<DateTime<Utc>>,
}

impl From<RepoRecord> for RepoSummary {
    fn from(record: RepoRecord) -> Self {
        RepoSummary {
            id: record.id,
            name: record.name,
            full_name: record.full_name,
            description: record.description,
            default_branch: record.default_branch.unwrap_or_else(|| "main".to_string()),
            html_url: record.html_url,
            private: record.private,
            owner: record.owner,
            relative_time: record
                .updated_at
                .map(|t| format_relative_time(t.timestamp())),
            updated_at: record.updated_at,
        }
    }
}

impl GitHubClient {
    pub async fn current_user(&self, credential: &Credential) -> Result<UserProfile> {
        self.send_json(self.get(credential, "/user")).await
    }

    /// Repositories the viewer owns or collaborates on, most recently
    /// updated first. Only the first page (100) is fetched.
    pub async fn list_repos(&self, credential: &Credential) -> Result<Vec<RepoSummary>> {
        let request = self
            .get(credential, "/user/repos")
            .query(&[("per_page", "100"), ("sort", "updated")]);
        let records: Vec<RepoRecord> = self.send_json(request).await?;
        tracing::debug!("Listed {} repositories", records.len());
        Ok(records.into_iter().map(RepoSummary::from).collect())
    }

    pub async fn get_repo(
        &self,
        credential: &Credential,
        owner: &str,
        repo: &str,
    ) -> Result<RepoSummary> {
        let record: RepoRecord = self
            .send_json(self.get(credential, &repo_path(owner, repo)))
            .await?;
        Ok(record.into())
    }
}

pub fn format_relative_time(timestamp: i64) -> String {
    let diff = Utc::now().timestamp() - timestamp;

    let (value, unit) = match diff {
        d if d < 60 => return "just now".to_string(),
        d if d < 3_600 => (d / 60, "minute"),
        d if d < 86_400 => (d / 3_600, "hour"),
        d if d < 2_592_000 => (d / 86_400, "day"),
        d if d < 31_536_000 => (d / 2_592_000, "month"),
        d => (d / 31_536_000, "year"),
    };
    format!("{} {}{} ago", value, unit, if value == 1 { "" } else { "s" })
}
