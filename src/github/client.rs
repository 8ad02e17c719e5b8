use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::auth::Credential;
use crate::error::{AppError, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper over the GitHub REST API. Holds no credential of its own;
/// every call is made on behalf of the `Credential` passed in.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_url: String,
}

impl GitHubClient {
    pub fn new(api_url: &str) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn get(&self, credential: &Credential, path: &str) -> RequestBuilder {
        self.authorize(self.http.get(format!("{}{}", self.api_url, path)), credential)
    }

    pub(crate) fn put(&self, credential: &Credential, path: &str) -> RequestBuilder {
        self.authorize(self.http.put(format!("{}{}", self.api_url, path)), credential)
    }

    fn authorize(&self, request: RequestBuilder, credential: &Credential) -> RequestBuilder {
        request
            .header(AUTHORIZATION, format!("token {}", credential.token()))
            .header(ACCEPT, GITHUB_ACCEPT)
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let response = check_response(response).await?;
        Ok(response.json().await?)
    }
}

/// Map a non-success GitHub response onto `AppError` by status code.
async fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = extract_message(&body);
    tracing::warn!(status = status.as_u16(), "GitHub API error: {}", message);

    Err(match status {
        StatusCode::UNAUTHORIZED => AppError::Unauthorized(message),
        StatusCode::FORBIDDEN => AppError::Forbidden(message),
        StatusCode::NOT_FOUND => AppError::NotFound(message),
        StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => AppError::Conflict(message),
        _ => AppError::Upstream {
            status: status.as_u16(),
            message,
        },
    })
}

/// GitHub error bodies look like `{"message": "...", "documentation_url": ...}`.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

/// Percent-encode each segment of a slash-delimited path, keeping the slashes.
pub(crate) fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

pub(crate) fn repo_path(owner: &str, repo: &str) -> String {
    format!(
        "/repos/{}/{}",
        urlencoding::encode(owner),
        urlencoding::encode(repo)
    )
}
