//! Repository and viewer DTOs.
//!
//! - `RepoSummary`: One repository in the sidebar list
//! - `OwnerInfo`: Repository owner (login + avatar)
//! - `UserProfile`: Signed-in viewer (header display)
//! - `SessionInfo`: Whether a GitHub credential is available

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub default_branch: String,
    pub html_url: String,
    pub private: bool,
    pub owner: OwnerInfo,
    pub updated_at: Option<DateTime<Utc>>,
    pub relative_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OwnerInfo {
    pub login: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CredentialSource {
    Header,
    Config,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionInfo {
    pub authenticated: bool,
    pub source: Option<CredentialSource>,
    pub summary_enabled: bool,
}
