//! Activities API Client
//!
//! HTTP bindings for the three activity endpoints.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client;
use thiserror::Error;

use crate::models::{Directory, ErrorReply, MutationReply};

/// Characters left as-is by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    /// No response reached the client
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    /// 2xx whose body is not what the endpoint promises
    #[error("malformed response body: {0}")]
    Malformed(String),
}

/// Server answer to a signup or removal
#[derive(Debug, Clone, PartialEq)]
pub enum MutationResponse {
    Accepted { message: String },
    Rejected { status: u16, detail: Option<String> },
}

#[async_trait(?Send)]
pub trait ActivityApi {
    async fn fetch_directory(&self) -> Result<Directory, ApiError>;
    async fn signup(&self, activity: &str, email: &str) -> Result<MutationResponse, ApiError>;
    async fn remove_participant(&self, activity: &str, email: &str) -> Result<MutationResponse, ApiError>;
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

pub fn signup_path(activity: &str, email: &str) -> String {
    format!("/activities/{}/signup?email={}", encode_component(activity), encode_component(email))
}

pub fn remove_path(activity: &str, email: &str) -> String {
    format!("/activities/{}/remove?email={}", encode_component(activity), encode_component(email))
}

/// Classify a mutation response from its status code and raw body
pub fn interpret_mutation(status: u16, body: &str) -> Result<MutationResponse, ApiError> {
    if (200..300).contains(&status) {
        let reply: MutationReply = serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
        return Ok(MutationResponse::Accepted { message: reply.message });
    }
    // An unreadable error body carries no detail
    let detail = serde_json::from_str::<ErrorReply>(body).ok().and_then(|reply| reply.detail);
    Ok(MutationResponse::Rejected { status, detail })
}

/// `reqwest`-backed client; on wasm32 this goes through `fetch`
#[derive(Clone)]
pub struct HttpActivityApi {
    client: Client,
    base: String,
}

impl HttpActivityApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { client: Client::new(), base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn finish(response: Result<reqwest::Response, reqwest::Error>) -> Result<MutationResponse, ApiError> {
        let response = response.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        interpret_mutation(status, &body)
    }
}

#[async_trait(?Send)]
impl ActivityApi for HttpActivityApi {
    async fn fetch_directory(&self) -> Result<Directory, ApiError> {
        log::debug!("[API] GET /activities");
        let response = self
            .client
            .get(self.url("/activities"))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MutationResponse, ApiError> {
        let path = signup_path(activity, email);
        log::debug!("[API] POST {}", path);
        Self::finish(self.client.post(self.url(&path)).send().await).await
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<MutationResponse, ApiError> {
        let path = remove_path(activity, email);
        log::debug!("[API] DELETE {}", path);
        Self::finish(self.client.delete(self.url(&path)).send().await).await
    }
}
