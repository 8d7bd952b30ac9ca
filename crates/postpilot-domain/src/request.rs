//! Generation requests - transient, constructed per call, never persisted

use crate::error::ValidationError;
use crate::preferences::UserPreferences;
use crate::profile::UserProfile;
use serde::{Deserialize, Serialize};

/// Kind of post to generate.
///
/// Unlike the preference enums this set is lenient on the wire: an
/// unrecognized value deserializes to `Text` rather than failing, so a
/// caller sending a new content type degrades to a plain text post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Poll with options
    Poll,
    /// Post built around an image
    Image,
    /// Post built around a short video
    Video,
    /// Text-only post
    #[default]
    #[serde(other)]
    Text,
}

impl ContentType {
    /// Get the content type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Poll => "poll",
            ContentType::Image => "image",
            ContentType::Video => "video",
        }
    }
}

/// Target length of the generated post.
///
/// Lenient on the wire: an unrecognized value falls back to `Medium`
/// (the 200-300 word band) rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentLength {
    /// 100-150 words
    Short,
    /// 350-500 words
    Long,
    /// 200-300 words
    #[default]
    #[serde(other)]
    Medium,
}

impl ContentLength {
    /// Get the length name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentLength::Short => "short",
            ContentLength::Medium => "medium",
            ContentLength::Long => "long",
        }
    }
}

/// A single content generation request.
///
/// Covers both the ideas and full-post operations: `idea` is absent when
/// asking for ideas and required when expanding one into a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Idea to expand into a full post (full-post requests only)
    #[serde(default)]
    pub idea: Option<String>,

    /// Profile the content is personalized for
    #[serde(default)]
    pub user_profile: UserProfile,

    /// Tone and cadence preferences
    #[serde(default)]
    pub preferences: UserPreferences,

    /// Kind of post to produce
    #[serde(default)]
    pub content_type: ContentType,

    /// Target length band
    #[serde(default)]
    pub content_length: ContentLength,

    /// Number of ideas to generate
    #[serde(default = "default_count")]
    pub count: u32,

    /// Trending terms to bias the prompt with, at most 5 by construction
    /// of the extraction collector
    #[serde(default)]
    pub trending_topics: Vec<String>,
}

fn default_count() -> u32 {
    3
}

impl GenerationRequest {
    /// Create a request for `count` post ideas
    pub fn for_ideas(
        user_profile: UserProfile,
        preferences: UserPreferences,
        count: u32,
        trending_topics: Vec<String>,
    ) -> Self {
        Self {
            idea: None,
            user_profile,
            preferences,
            content_type: ContentType::default(),
            content_length: ContentLength::default(),
            count,
            trending_topics,
        }
    }

    /// Create a request to expand `idea` into a full post
    pub fn for_post(
        idea: impl Into<String>,
        user_profile: UserProfile,
        preferences: UserPreferences,
        content_type: ContentType,
        content_length: ContentLength,
    ) -> Self {
        Self {
            idea: Some(idea.into()),
            user_profile,
            preferences,
            content_type,
            content_length,
            count: default_count(),
            trending_topics: Vec::new(),
        }
    }

    /// Validate structural invariants.
    ///
    /// `count` must be a positive integer. Enum fields are already closed
    /// or defaulted by construction.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.count == 0 {
            return Err(ValidationError::NotPositive("count"));
        }
        Ok(())
    }

    /// The idea to expand, or a `ValidationError` if none was supplied
    pub fn require_idea(&self) -> Result<&str, ValidationError> {
        self.idea
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingField("idea"))
    }
}
