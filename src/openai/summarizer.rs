//! Repository summaries via the OpenAI chat-completions API.
//!
//! A missing API key is not a startup failure: the summarizer is always
//! constructed and reports `NotConfigured` on each attempt instead.

use std::fmt;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_MAX_TOKENS: u32 = 60;

const NO_SUMMARY: &str = "No summary available";

#[derive(Clone)]
pub struct Summarizer {
    http: Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ReplyMessage>,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

impl Summarizer {
    pub fn new(
        api_url: &str,
        api_key: Option<String>,
        model: impl Into<String>,
        max_tokens: u32,
    ) -> Result<Self> {
        Ok(Self {
            http: Client::builder().build()?,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            model: model.into(),
            max_tokens,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn summarize(&self, repo_name: &str, repo_desc: &str) -> Result<String> {
        let repo_name = repo_name.trim();
        if repo_name.is_empty() {
            return Err(AppError::BadRequest("Missing repoName".to_string()));
        }

        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::NotConfigured("OpenAI API key not configured".to_string()))?;

        let prompt = build_prompt(repo_name, repo_desc);
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: &prompt,
            }],
            max_tokens: self.max_tokens,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "OpenAI API error: {}", body);
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message: "OpenAI request failed".to_string(),
            });
        }

        let reply: ChatResponse = response.json().await?;
        let summary = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| NO_SUMMARY.to_string());

        tracing::debug!("Generated summary for {} ({} chars)", repo_name, summary.len());
        Ok(summary)
    }
}

impl fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Summarizer")
            .field("api_url", &self.api_url)
            .field("enabled", &self.is_enabled())
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

pub fn build_prompt(repo_name: &str, repo_desc: &str) -> String {
    format!(
        "Write a creative and engaging summary for a GitHub repository called \"{}\". Description: \"{}\".",
        repo_name, repo_desc
    )
}
