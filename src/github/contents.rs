use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::auth::Credential;
use crate::error::{AppError, Result};
use crate::github::client::{GitHubClient, encode_path, repo_path};
use crate::models::{FileContent, SaveFileRequest, SavedFile};

#[derive(Debug, Deserialize)]
struct ContentRecord {
    #[serde(rename = "type")]
    kind: String,
    path: String,
    sha: String,
    #[serde(default)]
    size: u64,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
}

/// The contents endpoint answers with an object for a file and an array
/// for a directory.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ContentsResponse {
    File(ContentRecord),
    Listing(Vec<serde_json::Value>),
}

#[derive(Debug, Serialize)]
struct PutContents<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct PutContentsResponse {
    content: ObjectRef,
    commit: CommitRef,
}

#[derive(Debug, Deserialize)]
struct ObjectRef {
    path: String,
    sha: String,
}

#[derive(Debug, Deserialize)]
struct CommitRef {
    sha: String,
}

impl GitHubClient {
    pub async fn get_file(
        &self,
        credential: &Credential,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<FileContent> {
        if path.is_empty() {
            return Err(AppError::BadRequest("Missing file path".to_string()));
        }

        let mut request = self.get(
            credential,
            &format!("{}/contents/{}", repo_path(owner, repo), encode_path(path)),
        );
        if let Some(r) = git_ref {
            request = request.query(&[("ref", r)]);
        }

        let record = match self.send_json::<ContentsResponse>(request).await? {
            ContentsResponse::File(record) => record,
            ContentsResponse::Listing(_) => {
                return Err(AppError::BadRequest(format!("{} is a directory", path)));
            }
        };

        if record.kind != "file" {
            return Err(AppError::BadRequest(format!(
                "{} is a {}, not a file",
                path, record.kind
            )));
        }

        let content = match (record.encoding.as_deref(), record.content.as_deref()) {
            (Some("base64"), Some(encoded)) => decode_content(&record.path, encoded)?,
            _ => {
                return Err(AppError::BadRequest(format!(
                    "{} is too large to open in the editor",
                    path
                )));
            }
        };

        Ok(FileContent {
            path: record.path,
            content,
            sha: record.sha,
            size: record.size,
        })
    }

    /// Write a file back. `request.sha` must be the revision token of the
    /// last read; GitHub rejects the write otherwise.
    pub async fn save_file(
        &self,
        credential: &Credential,
        owner: &str,
        repo: &str,
        request: &SaveFileRequest,
    ) -> Result<SavedFile> {
        if request.path.is_empty() {
            return Err(AppError::BadRequest("Missing file path".to_string()));
        }

        let default_message = format!("Update {} via app", request.path);
        let body = PutContents {
            message: request.message.as_deref().unwrap_or(&default_message),
            content: STANDARD.encode(request.content.as_bytes()),
            sha: request.sha.as_deref(),
            branch: request.branch.as_deref(),
        };

        let put = self
            .put(
                credential,
                &format!("{}/contents/{}", repo_path(owner, repo), encode_path(&request.path)),
            )
            .json(&body);
        let response: PutContentsResponse = self.send_json(put).await?;

        tracing::info!(
            "Saved {}/{}:{} as commit {}",
            owner,
            repo,
            response.content.path,
            response.commit.sha
        );

        Ok(SavedFile {
            path: response.content.path,
            sha: response.content.sha,
            commit_sha: response.commit.sha,
        })
    }
}

/// GitHub wraps base64 content at 60 columns.
fn decode_content(path: &str, encoded: &str) -> Result<String> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD.decode(compact).map_err(|e| AppError::Upstream {
        status: 200,
        message: format!("Invalid base64 content for {}: {}", path, e),
    })?;
    String::from_utf8(bytes).map_err(|_| AppError::NotText(path.to_string()))
}
