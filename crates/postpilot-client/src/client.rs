//! High-level API client
//!
//! Typed wrappers over the backend proxy's content endpoints. Wire field
//! names are camelCase to match the JSON surface.

use crate::error::ClientError;
use crate::transport::RetryingTransport;
use chrono::{DateTime, Utc};
use postpilot_domain::GenerationRequest;
use serde::{Deserialize, Serialize};

/// Response from the idea-generation endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdeasResponse {
    /// Generated content ideas, in model order
    pub ideas: Vec<String>,
}

/// Response from the post-generation endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostResponse {
    /// The generated post text
    pub post: String,
}

/// Response from the scheduling endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Identifier of the stored post
    #[serde(rename = "postId")]
    pub post_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleRequest<'a> {
    user_id: &'a str,
    content: &'a str,
    scheduled_time: DateTime<Utc>,
}

/// Client for the backend content API
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    transport: RetryingTransport,
}

impl ApiClient {
    /// Create a client against the given base URL (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            transport: RetryingTransport::new(),
        }
    }

    /// Create a client with a custom transport
    pub fn with_transport(base_url: impl Into<String>, transport: RetryingTransport) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            transport,
        }
    }

    /// Attach a bearer token to subsequent requests
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drop the stored bearer token
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request a batch of content ideas
    pub async fn generate_ideas(
        &self,
        request: &GenerationRequest,
    ) -> Result<IdeasResponse, ClientError> {
        self.transport
            .post_json(
                &self.url("/api/content/generate-ideas"),
                request,
                self.token.as_deref(),
            )
            .await
    }

    /// Request a full post for a chosen idea
    pub async fn generate_post(
        &self,
        request: &GenerationRequest,
    ) -> Result<PostResponse, ClientError> {
        self.transport
            .post_json(
                &self.url("/api/content/generate-post"),
                request,
                self.token.as_deref(),
            )
            .await
    }

    /// Schedule a post for later publication
    pub async fn schedule_post(
        &self,
        user_id: &str,
        content: &str,
        scheduled_time: DateTime<Utc>,
    ) -> Result<ScheduleResponse, ClientError> {
        let body = ScheduleRequest {
            user_id,
            content,
            scheduled_time,
        };
        self.transport
            .post_json(
                &self.url("/api/content/schedule"),
                &body,
                self.token.as_deref(),
            )
            .await
    }
}
