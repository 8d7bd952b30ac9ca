//! Shared error taxonomy for the generation core

use thiserror::Error;

/// Errors surfaced by the generation boundary.
///
/// The generation client is the sole fallible boundary in the core; its
/// failures always carry the upstream message and are never silently
/// swallowed.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The provider rejected the request outright (4xx-equivalent or
    /// malformed request). Not retried.
    #[error("generation rejected by provider: {0}")]
    Rejected(String),

    /// The retry budget was exhausted. Wraps the last underlying error.
    #[error("generation failed after retry: {0}")]
    Exhausted(String),

    /// The provider answered, but the response could not be interpreted.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Input validation failure.
///
/// Raised when a request value falls outside its closed enum set or
/// violates a structural invariant. Validation rejects, it never coerces.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A value outside the allowed set
    #[error("invalid value for {field}: {value}")]
    InvalidValue {
        /// Field that failed validation
        field: &'static str,
        /// The rejected value
        value: String,
    },

    /// A count or size that must be a positive integer
    #[error("{0} must be a positive integer")]
    NotPositive(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_carries_upstream_message() {
        let err = GenerationError::Rejected("HTTP 400: bad prompt".to_string());
        assert!(err.to_string().contains("HTTP 400: bad prompt"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidValue {
            field: "contentTone",
            value: "sarcastic".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value for contentTone: sarcastic");

        let err = ValidationError::NotPositive("count");
        assert_eq!(err.to_string(), "count must be a positive integer");
    }
}
