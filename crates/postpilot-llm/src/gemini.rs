//! Gemini Provider Implementation
//!
//! Integration with the Google Generative Language REST API.
//!
//! # Features
//!
//! - Async HTTP communication via reqwest
//! - Configurable endpoint, model, and retry delay
//! - One implicit retry for classified-retryable failures
//! - Request timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use postpilot_llm::GeminiProvider;
//!
//! let provider = GeminiProvider::new("api-key", "gemini-pro");
//! // provider.generate(prompt) resolves once the provider responded or
//! // the retry budget is exhausted
//! ```

use crate::retry::{with_single_retry, AttemptError, DEFAULT_RETRY_DELAY};
use postpilot_domain::error::GenerationError;
use postpilot_domain::traits::TextGenerator;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

/// Default Generative Language API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Default timeout for a single generation request (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the API credential
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

static SHARED: OnceLock<GeminiProvider> = OnceLock::new();

/// Gemini API provider for text generation
///
/// Wraps the generateContent endpoint with the one-shot retry policy from
/// [`crate::retry`]. No mutable state beyond the reqwest client; concurrent
/// calls are safe.
pub struct GeminiProvider {
    endpoint: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
    retry_delay: Duration,
}

/// Request body for the generateContent API
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Response from the generateContent API
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Parameters
    ///
    /// - `api_key`: Generative Language API credential
    /// - `model`: Model to use (e.g., "gemini-pro")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            model: model.into(),
            client,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Override the API endpoint (for local stubs and tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the delay before the single retry attempt
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Process-wide shared provider.
    ///
    /// Constructed exactly once even when concurrent first uses race; the
    /// credential comes from `GEMINI_API_KEY`, falling back to a
    /// development placeholder.
    pub fn shared() -> &'static GeminiProvider {
        SHARED.get_or_init(|| {
            let api_key = std::env::var(API_KEY_ENV)
                .unwrap_or_else(|_| "default-key-for-development".to_string());
            GeminiProvider::new(api_key, DEFAULT_MODEL)
        })
    }

    /// Generate text for a prompt
    ///
    /// Suspends until the provider responds or the retry budget is
    /// exhausted. Retryable failures (quota/rate-limit marker, 5xx,
    /// network-level error) are retried exactly once after the configured
    /// delay; everything else propagates immediately.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The provider rejects the request (4xx)
    /// - The retry budget is exhausted
    /// - The response body cannot be interpreted
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = with_single_retry(self.retry_delay, || self.attempt(prompt)).await?;

        let response: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GenerationError::InvalidResponse(format!("failed to parse response: {}", e)))?;

        response
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .ok_or_else(|| GenerationError::InvalidResponse("no candidates in response".to_string()))
    }

    /// One upstream attempt. Returns the raw response body on 2xx so the
    /// retry loop stays free of parsing concerns.
    async fn attempt(&self, prompt: &str) -> Result<String, AttemptError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        match self.client.post(&url).json(&request_body).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    response
                        .text()
                        .await
                        .map_err(|e| AttemptError::network(format!("failed to read response: {}", e)))
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(AttemptError::http(
                        status.as_u16(),
                        format!("HTTP {}: {}", status, error_text),
                    ))
                }
            }
            Err(e) => Err(AttemptError::network(format!("request failed: {}", e))),
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        GeminiProvider::generate(self, prompt).await
    }
}
