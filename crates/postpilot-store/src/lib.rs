//! Postpilot Storage Layer
//!
//! SQLite-backed implementation of the `ScheduleStore` trait.
//!
//! # Architecture
//!
//! - One `scheduled_posts` table, schema applied on open
//! - Timestamps stored as RFC 3339 text
//! - UUIDv7 identifiers assigned at creation
//!
//! # Examples
//!
//! ```no_run
//! use postpilot_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is ready for scheduling operations
//! ```

#![warn(missing_docs)]

use chrono::{DateTime, Utc};
use postpilot_domain::traits::ScheduleStore;
use postpilot_domain::{PostStatus, ScheduledPost};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during scheduling persistence
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The backing store is unreachable or rejected the write
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored row could not be interpreted
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of `ScheduleStore`
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe; share a store across tasks
/// behind a mutex, or give each thread its own instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a store at the given database path.
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Apply the schema (idempotent)
    fn initialize_schema(&self) -> Result<(), PersistenceError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    fn row_to_post(row: &rusqlite::Row<'_>) -> Result<ScheduledPost, PersistenceError> {
        let status_text: String = row.get(4)?;
        let status = PostStatus::parse(&status_text)
            .ok_or_else(|| PersistenceError::InvalidData(format!("unknown status: {}", status_text)))?;

        let scheduled_time: String = row.get(3)?;
        let created_at: String = row.get(5)?;

        Ok(ScheduledPost {
            id: row.get(0)?,
            user_id: row.get(1)?,
            content: row.get(2)?,
            scheduled_time: parse_timestamp(&scheduled_time)?,
            status,
            created_at: parse_timestamp(&created_at)?,
        })
    }
}

fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, PersistenceError> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| PersistenceError::InvalidData(format!("bad timestamp {}: {}", text, e)))
}

impl ScheduleStore for SqliteStore {
    type Error = PersistenceError;

    /// Persist a new post with status pending.
    ///
    /// At-most-once per logical request from the caller's perspective;
    /// there is no idempotency key, so a caller retrying a timed-out
    /// schedule call can create a duplicate row.
    fn create_scheduled_post(
        &mut self,
        user_id: &str,
        content: &str,
        scheduled_time: DateTime<Utc>,
    ) -> Result<ScheduledPost, Self::Error> {
        let post = ScheduledPost {
            id: Uuid::now_v7().to_string(),
            user_id: user_id.to_string(),
            content: content.to_string(),
            scheduled_time,
            status: PostStatus::Pending,
            created_at: Utc::now(),
        };

        self.conn.execute(
            "INSERT INTO scheduled_posts (id, user_id, content, scheduled_time, status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                post.id,
                post.user_id,
                post.content,
                post.scheduled_time.to_rfc3339(),
                post.status.as_str(),
                post.created_at.to_rfc3339(),
            ],
        )?;

        Ok(post)
    }

    fn get_scheduled_post(&self, id: &str) -> Result<Option<ScheduledPost>, Self::Error> {
        self.conn
            .query_row(
                "SELECT id, user_id, content, scheduled_time, status, created_at
                 FROM scheduled_posts WHERE id = ?1",
                params![id],
                |row| Ok(Self::row_to_post(row)),
            )
            .optional()?
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn memory_store() -> SqliteStore {
        SqliteStore::new(":memory:").unwrap()
    }

    #[test]
    fn test_create_scheduled_post_is_pending() {
        let mut store = memory_store();
        let when = Utc.with_ymd_and_hms(2026, 9, 1, 8, 30, 0).unwrap();

        let post = store
            .create_scheduled_post("user-42", "Big announcement", when)
            .unwrap();

        assert!(!post.id.is_empty());
        assert_eq!(post.status, PostStatus::Pending);
        assert_eq!(post.scheduled_time, when);
    }

    #[test]
    fn test_round_trip_by_id() {
        let mut store = memory_store();
        let when = Utc.with_ymd_and_hms(2026, 9, 1, 8, 30, 0).unwrap();

        let created = store
            .create_scheduled_post("user-42", "Big announcement", when)
            .unwrap();
        let fetched = store.get_scheduled_post(&created.id).unwrap().unwrap();

        assert_eq!(fetched, created);
    }

    #[test]
    fn test_get_missing_post() {
        let store = memory_store();
        assert!(store.get_scheduled_post("nope").unwrap().is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = memory_store();
        let when = Utc::now();

        let a = store.create_scheduled_post("u", "one", when).unwrap();
        let b = store.create_scheduled_post("u", "two", when).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.db");
        let when = Utc.with_ymd_and_hms(2026, 9, 1, 8, 30, 0).unwrap();

        let id = {
            let mut store = SqliteStore::new(&path).unwrap();
            store
                .create_scheduled_post("user-42", "Persisted", when)
                .unwrap()
                .id
        };

        let store = SqliteStore::new(&path).unwrap();
        let post = store.get_scheduled_post(&id).unwrap().unwrap();
        assert_eq!(post.content, "Persisted");
        assert_eq!(post.status, PostStatus::Pending);
    }
}
