//! Scheduled posts and their pending -> posted lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication status of a scheduled post
///
/// Transitions pending -> posted exactly once, driven by an external
/// publisher. Posts are never deleted in normal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Waiting for its scheduled time
    Pending,
    /// Already published
    Posted,
}

impl PostStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Pending => "pending",
            PostStatus::Posted => "posted",
        }
    }

    /// Parse a status from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(PostStatus::Pending),
            "posted" => Some(PostStatus::Posted),
            _ => None,
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid post status: {}", s))
    }
}

/// A post persisted by the scheduling store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPost {
    /// Store-assigned identifier
    pub id: String,

    /// Owner of the post
    pub user_id: String,

    /// Full post text
    pub content: String,

    /// When the external publisher should publish it
    pub scheduled_time: DateTime<Utc>,

    /// Current lifecycle status
    pub status: PostStatus,

    /// When the post was persisted
    pub created_at: DateTime<Utc>,
}

impl ScheduledPost {
    /// Transition pending -> posted.
    ///
    /// Fails if the post was already published; the transition happens
    /// exactly once.
    pub fn mark_posted(&mut self) -> Result<(), String> {
        match self.status {
            PostStatus::Pending => {
                self.status = PostStatus::Posted;
                Ok(())
            }
            PostStatus::Posted => Err(format!("post {} is already posted", self.id)),
        }
    }
}
