//! Storage trait definitions for hookfeed
//!
//! - `Event`: the canonical, storage-ready activity record
//! - `EventStore`: append-only persistence with a bounded recent-first read
//!
//! The trait is async and backend-agnostic. An in-memory fake is provided
//! for testing via the `fakes` module.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Number of events served to the polling client.
pub const RECENT_EVENTS_LIMIT: usize = 20;

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// Canonical action of a stored event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventAction {
    Push,
    PullRequest,
    Merge,
}

impl EventAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventAction::Push => "PUSH",
            EventAction::PullRequest => "PULL_REQUEST",
            EventAction::Merge => "MERGE",
        }
    }
}

impl FromStr for EventAction {
    type Err = StorageError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "PUSH" => Ok(EventAction::Push),
            "PULL_REQUEST" => Ok(EventAction::PullRequest),
            "MERGE" => Ok(EventAction::Merge),
            other => Err(StorageError::Corrupt {
                reason: format!("unknown event action: {other}"),
            }),
        }
    }
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized repository event, as stored and served.
///
/// `timestamp` is kept exactly as the provider sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Short commit hash (push) or pull request id (pull request)
    pub request_id: String,
    pub author: String,
    pub action: EventAction,
    /// Source branch; `None` for pushes
    pub from_branch: Option<String>,
    pub to_branch: String,
    pub timestamp: String,
}

impl Event {
    /// Ordering key for this event, see [`sort_key`].
    pub fn sort_key(&self) -> String {
        sort_key(&self.timestamp)
    }
}

/// Derive the ordering key for a provider timestamp.
///
/// RFC 3339 timestamps are converted to UTC with fixed nanosecond precision,
/// so lexicographic order of keys is chronological order even across mixed
/// offsets. Anything else is returned verbatim.
pub fn sort_key(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Nanos, true),
        Err(_) => timestamp.to_string(),
    }
}

// ---------------------------------------------------------------------------
// EventStore
// ---------------------------------------------------------------------------

/// Append-only event store.
///
/// Guarantees:
/// - `insert` never rejects a well-formed event; duplicates are kept.
/// - `list_recent(n)` returns at most `n` events ordered newest first.
/// - Neither operation exposes a storage identifier.
/// - An unreachable backend surfaces as `StorageError::Unavailable`; no retry.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Append one event.
    async fn insert(&self, event: &Event) -> StorageResult<()>;

    /// Return up to `limit` events ordered by timestamp, newest first.
    async fn list_recent(&self, limit: usize) -> StorageResult<Vec<Event>>;
}
