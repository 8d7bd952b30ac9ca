//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates.

use crate::error::GenerationError;
use crate::post::ScheduledPost;
use chrono::{DateTime, Utc};

/// Trait for generative text providers
///
/// Implemented by the infrastructure layer (postpilot-llm). Object-safe so
/// callers can hold `Arc<dyn TextGenerator>`; the retry policy lives inside
/// the implementation, a call resolves only when the provider responded or
/// the retry budget is exhausted.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Trait for persisting scheduled posts
///
/// Implemented by the infrastructure layer (postpilot-store). The core
/// requires creation only; reads exist for verification, and there are no
/// update/delete operations.
pub trait ScheduleStore {
    /// Error type for store operations
    type Error;

    /// Persist a new post with status pending
    fn create_scheduled_post(
        &mut self,
        user_id: &str,
        content: &str,
        scheduled_time: DateTime<Utc>,
    ) -> Result<ScheduledPost, Self::Error>;

    /// Look up a post by id
    fn get_scheduled_post(&self, id: &str) -> Result<Option<ScheduledPost>, Self::Error>;
}
