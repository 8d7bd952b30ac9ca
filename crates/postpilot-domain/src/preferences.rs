//! User preferences - closed enum sets validated on every write

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Stylistic directive applied to generation prompts
///
/// A closed set: values outside it are rejected at deserialization
/// (`ValidationError` at the boundary), never coerced to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentTone {
    /// Formal, authoritative, industry-specific terminology
    Professional,
    /// Friendly, approachable, first-person perspective
    Conversational,
    /// Informative, clear explanations, data-backed insights
    Educational,
    /// Motivational, story-driven, emotionally resonant
    Inspiring,
}

impl ContentTone {
    /// Get the tone name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentTone::Professional => "professional",
            ContentTone::Conversational => "conversational",
            ContentTone::Educational => "educational",
            ContentTone::Inspiring => "inspiring",
        }
    }

    /// Parse a tone from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "professional" => Some(ContentTone::Professional),
            "conversational" => Some(ContentTone::Conversational),
            "educational" => Some(ContentTone::Educational),
            "inspiring" => Some(ContentTone::Inspiring),
            _ => None,
        }
    }
}

impl std::str::FromStr for ContentTone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::InvalidValue {
            field: "contentTone",
            value: s.to_string(),
        })
    }
}

/// How often the user wants to publish posts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostFrequency {
    /// Every day
    Daily,
    /// Once a week
    Weekly,
    /// Once a month
    Monthly,
}

impl PostFrequency {
    /// Get the frequency name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PostFrequency::Daily => "daily",
            PostFrequency::Weekly => "weekly",
            PostFrequency::Monthly => "monthly",
        }
    }
}

/// How aggressively the assistant suggests comments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentFrequency {
    /// Rarely suggest comments
    Low,
    /// Balanced suggestion rate
    Medium,
    /// Suggest comments often
    High,
}

impl CommentFrequency {
    /// Get the frequency name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentFrequency::Low => "low",
            CommentFrequency::Medium => "medium",
            CommentFrequency::High => "high",
        }
    }
}

/// User preferences governing content generation.
///
/// Every field with a closed value set is validated on write; invalid
/// values fail deserialization rather than being coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Tone applied to generation prompts
    pub content_tone: ContentTone,

    /// Posting cadence
    #[serde(default = "default_post_frequency")]
    pub post_frequency: PostFrequency,

    /// Comment suggestion cadence
    #[serde(default = "default_comment_frequency")]
    pub comment_frequency: CommentFrequency,

    /// Master switch for AI generation
    #[serde(default = "default_true")]
    pub ai_generation_enabled: bool,
}

fn default_post_frequency() -> PostFrequency {
    PostFrequency::Weekly
}

fn default_comment_frequency() -> CommentFrequency {
    CommentFrequency::Medium
}

fn default_true() -> bool {
    true
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            content_tone: ContentTone::Professional,
            post_frequency: PostFrequency::Weekly,
            comment_frequency: CommentFrequency::Medium,
            ai_generation_enabled: true,
        }
    }
}
