//! Postpilot Domain Layer
//!
//! This crate contains the core domain model for Postpilot: the user profile
//! and preference types, generation requests, scheduled posts, the shared
//! error taxonomy, and the trait interfaces that all other layers depend on.
//!
//! ## Key Concepts
//!
//! - **UserProfile / UserPreferences**: who the post is for and how it
//!   should sound. Preference enums are closed sets - invalid values are
//!   rejected at deserialization, never coerced.
//! - **GenerationRequest**: a transient, per-call description of what to
//!   generate (ideas or a full post).
//! - **ScheduledPost**: a persisted post with a pending -> posted lifecycle.
//!
//! ## Architecture
//!
//! - Pure domain logic only
//! - Trait definitions for the generation and persistence boundaries
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod post;
pub mod preferences;
pub mod profile;
pub mod request;
pub mod traits;

// Re-exports for convenience
pub use error::{GenerationError, ValidationError};
pub use post::{PostStatus, ScheduledPost};
pub use preferences::{CommentFrequency, ContentTone, PostFrequency, UserPreferences};
pub use profile::UserProfile;
pub use request::{ContentLength, ContentType, GenerationRequest};
