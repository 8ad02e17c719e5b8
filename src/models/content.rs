//! File content DTOs for the editor panel.
//!
//! A save must carry the `sha` returned by the last read of the same file;
//! the response carries the new `sha` for the next save.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileContent {
    pub path: String,
    pub content: String,
    pub sha: String,
    pub size: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveFileRequest {
    pub path: String,
    pub content: String,
    pub sha: Option<String>,
    pub message: Option<String>,
    pub branch: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedFile {
    pub path: String,
    pub sha: String,
    pub commit_sha: String,
}
