//! Error types for the content engine

use postpilot_domain::error::{GenerationError, ValidationError};
use thiserror::Error;

/// Errors that can occur while generating content
#[derive(Error, Debug)]
pub enum ContentError {
    /// The generation provider failed after its retry policy ran out, or
    /// rejected the request outright
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    /// The request violated an invariant
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The user turned AI generation off
    #[error("AI generation is disabled in user preferences")]
    Disabled,

    /// The caller-side timeout elapsed before the provider answered
    #[error("generation timed out")]
    Timeout,
}
