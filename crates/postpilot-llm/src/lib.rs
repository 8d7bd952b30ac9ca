//! Postpilot Generation Provider Layer
//!
//! Implementations of the `TextGenerator` trait from `postpilot-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic, scriptable mock for testing
//! - `GeminiProvider`: Google Gemini REST API integration with bounded
//!   retry and error classification
//!
//! # Examples
//!
//! ```
//! use postpilot_llm::MockProvider;
//! use postpilot_domain::traits::TextGenerator;
//!
//! # async fn example() {
//! let provider = MockProvider::new("Hello from the model!");
//! let result = provider.generate("test prompt").await.unwrap();
//! assert_eq!(result, "Hello from the model!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;
pub mod retry;

use postpilot_domain::error::GenerationError;
use postpilot_domain::traits::TextGenerator;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub use gemini::GeminiProvider;
pub use retry::{with_single_retry, AttemptError, DEFAULT_RETRY_DELAY};

/// Mock generation provider for deterministic testing
///
/// Returns pre-scripted outcomes without making any network calls. Each
/// call consumes the next scripted outcome; once the script is exhausted
/// the fixed default response is returned.
///
/// # Examples
///
/// ```
/// use postpilot_llm::MockProvider;
/// use postpilot_domain::traits::TextGenerator;
///
/// # async fn example() {
/// let provider = MockProvider::new("fallback");
/// provider.push_response("1. First idea 2. Second idea");
///
/// assert_eq!(provider.generate("p").await.unwrap(), "1. First idea 2. Second idea");
/// assert_eq!(provider.generate("p").await.unwrap(), "fallback");
/// assert_eq!(provider.call_count(), 2);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    script: Arc<Mutex<VecDeque<Result<String, GenerationError>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a successful response for the next unscripted call
    pub fn push_response(&self, response: impl Into<String>) {
        self.script.lock().unwrap().push_back(Ok(response.into()));
    }

    /// Queue an error for the next unscripted call
    pub fn push_error(&self, error: GenerationError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait::async_trait]
impl TextGenerator for MockProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(outcome) = self.script.lock().unwrap().pop_front() {
            return outcome;
        }

        Ok(self.default_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate("any prompt").await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_scripted_outcomes() {
        let provider = MockProvider::default();
        provider.push_response("first");
        provider.push_error(GenerationError::Rejected("HTTP 400: bad request".to_string()));

        assert_eq!(provider.generate("p").await.unwrap(), "first");
        assert!(matches!(
            provider.generate("p").await,
            Err(GenerationError::Rejected(_))
        ));
        // Script exhausted, default takes over
        assert_eq!(provider.generate("p").await.unwrap(), "Default mock response");
    }

    #[tokio::test]
    async fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);

        provider.generate("prompt1").await.unwrap();
        assert_eq!(provider.call_count(), 1);

        provider.generate("prompt2").await.unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("test").await.unwrap();

        // Both share the same call count via Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
