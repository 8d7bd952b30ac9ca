//! Client error types

use thiserror::Error;

/// Errors from calls to the backend proxy
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network-level failure with no HTTP response
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with an error status
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// The backend answered 2xx but the body could not be decoded
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
