//! Retrying HTTP transport
//!
//! Connection-level resilience for generic backend calls: up to 3 retries
//! with a fixed delay, applied to network errors and 5xx responses. 4xx
//! responses are the caller's problem and propagate immediately.

use crate::error::ClientError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Default number of retries after the initial attempt
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default fixed delay between attempts (1 second)
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Retry policy for the transport
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Retries after the initial attempt
    pub max_retries: u32,
    /// Fixed delay between attempts
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

/// Whether an HTTP status warrants a retry. Server errors do; client
/// errors never do.
pub fn retry_on_status(status: u16) -> bool {
    status >= 500
}

/// reqwest wrapper applying the retry policy to JSON POSTs
pub struct RetryingTransport {
    client: reqwest::Client,
    policy: RetryPolicy,
}

impl RetryingTransport {
    /// Create a transport with the default policy
    pub fn new() -> Self {
        Self::with_policy(RetryPolicy::default())
    }

    /// Create a transport with a custom policy
    pub fn with_policy(policy: RetryPolicy) -> Self {
        Self {
            client: reqwest::Client::new(),
            policy,
        }
    }

    /// POST a JSON body and decode a JSON response, retrying per policy.
    ///
    /// `token`, when present, is sent as a bearer credential.
    pub async fn post_json<B, R>(
        &self,
        url: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<R, ClientError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let mut attempts = 0u32;

        loop {
            attempts += 1;

            let mut request = self.client.post(url).json(body);
            if let Some(token) = token {
                request = request.bearer_auth(token);
            }

            let failure = match request.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    if response.status().is_success() {
                        return response
                            .json::<R>()
                            .await
                            .map_err(|e| ClientError::InvalidResponse(e.to_string()));
                    }

                    let message = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());

                    if !retry_on_status(status) {
                        return Err(ClientError::Api { status, message });
                    }
                    ClientError::Api { status, message }
                }
                Err(e) => ClientError::Transport(e.to_string()),
            };

            if attempts > self.policy.max_retries {
                return Err(failure);
            }

            tokio::time::sleep(self.policy.retry_delay).await;
        }
    }
}

impl Default for RetryingTransport {
    fn default() -> Self {
        Self::new()
    }
}
