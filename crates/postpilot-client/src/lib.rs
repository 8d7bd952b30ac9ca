//! Postpilot API Client
//!
//! Extension-side client for the backend proxy. All calls go through a
//! retrying transport: the initial attempt plus up to 3 retries with a
//! fixed delay, retrying only on network errors or 5xx responses. This
//! transport-level policy is independent of the one-shot retry inside the
//! generation provider; the two layers guard different call sites.

#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod transport;

pub use client::{ApiClient, IdeasResponse, PostResponse, ScheduleResponse};
pub use error::ClientError;
pub use transport::{RetryPolicy, RetryingTransport};
