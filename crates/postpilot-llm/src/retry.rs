//! One-shot retry policy for generation calls
//!
//! The generation client retries a classified-retryable failure exactly
//! once after a fixed delay. This is deliberately separate from the
//! 3-attempt transport retry in `postpilot-client`; the two layers guard
//! different call sites and are never merged.

use postpilot_domain::error::GenerationError;
use std::future::Future;
use std::time::Duration;

/// Fixed delay before the single retry attempt (2 seconds)
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(2000);

/// A failed upstream attempt, before classification
#[derive(Debug, Clone)]
pub struct AttemptError {
    /// HTTP-style status code, if the provider responded at all
    pub status: Option<u16>,
    /// Upstream error message
    pub message: String,
}

impl AttemptError {
    /// A network-level failure: abort, timeout, no response
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// An HTTP error response with a status code
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Classify the failure.
    ///
    /// Retryable: a quota/rate-limit marker in the message, a 5xx status,
    /// or a network-level failure with no response. Everything else (4xx,
    /// malformed request) propagates immediately.
    pub fn is_retryable(&self) -> bool {
        let message = self.message.to_lowercase();
        if message.contains("quota") || message.contains("rate limit") {
            return true;
        }
        match self.status {
            Some(status) => status >= 500,
            None => true,
        }
    }
}

/// Run `attempt`, retrying exactly once after `delay` when the first
/// failure is classified retryable.
///
/// Non-retryable failures propagate immediately as
/// `GenerationError::Rejected`; a failed retry propagates as
/// `GenerationError::Exhausted` wrapping the last underlying message.
pub async fn with_single_retry<F, Fut>(
    delay: Duration,
    mut attempt: F,
) -> Result<String, GenerationError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<String, AttemptError>>,
{
    match attempt().await {
        Ok(text) => Ok(text),
        Err(err) if err.is_retryable() => {
            tokio::time::sleep(delay).await;
            attempt()
                .await
                .map_err(|last| GenerationError::Exhausted(last.message))
        }
        Err(err) => Err(GenerationError::Rejected(err.message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::time::Instant;

    #[test]
    fn test_classification_quota_marker() {
        let err = AttemptError::http(200, "Resource exhausted: quota exceeded");
        assert!(err.is_retryable());

        let err = AttemptError::http(429, "Rate limit reached for model");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_classification_server_errors() {
        assert!(AttemptError::http(500, "internal error").is_retryable());
        assert!(AttemptError::http(503, "unavailable").is_retryable());
        assert!(!AttemptError::http(400, "bad request").is_retryable());
        assert!(!AttemptError::http(404, "not found").is_retryable());
    }

    #[test]
    fn test_classification_network_failure() {
        assert!(AttemptError::network("connection aborted").is_retryable());
    }

    #[tokio::test(start_paused = true)]
    async fn test_retryable_failure_then_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let start = Instant::now();

        let counter = Arc::clone(&calls);
        let result = with_single_retry(DEFAULT_RETRY_DELAY, move || {
            let counter = Arc::clone(&counter);
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(AttemptError::http(503, "HTTP 503: service unavailable"))
                } else {
                    Ok("generated text".to_string())
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "generated text");
        // Exactly 2 upstream calls, with the configured delay between them
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(start.elapsed() >= DEFAULT_RETRY_DELAY);
    }

    #[tokio::test]
    async fn test_non_retryable_fails_after_one_call() {
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        let result: Result<String, _> = with_single_retry(DEFAULT_RETRY_DELAY, move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(AttemptError::http(400, "HTTP 400: malformed request"))
            }
        })
        .await;

        assert!(matches!(result, Err(GenerationError::Rejected(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("HTTP 400: malformed request"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_budget_exhausted_wraps_last_error() {
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        let result: Result<String, _> = with_single_retry(DEFAULT_RETRY_DELAY, move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(AttemptError::http(503, "HTTP 503: still down"))
            }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        match result {
            Err(GenerationError::Exhausted(message)) => {
                assert!(message.contains("HTTP 503: still down"));
            }
            other => panic!("Expected Exhausted error, got {:?}", other.map(|_| ())),
        }
    }
}
