//! Typed schemas for GitHub webhook payloads.
//!
//! Only the paths the normalizer reads are declared, each as an `Option`, so
//! a missing field decodes to `None` and unknown fields are ignored.

use serde::Deserialize;
use serde_json::Value;

/// Body of a `push` delivery
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushPayload {
    pub pusher: Option<Pusher>,
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
    /// Absent or null for branch deletions
    pub head_commit: Option<HeadCommit>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pusher {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeadCommit {
    pub id: Option<String>,
    pub timestamp: Option<String>,
}

/// Body of a `pull_request` delivery
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestPayload {
    /// Provider sub-action (`opened`, `closed`, `synchronize`, ...)
    pub action: Option<String>,
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequest {
    pub id: Option<u64>,
    pub user: Option<User>,
    pub head: Option<GitRef>,
    pub base: Option<GitRef>,
    pub updated_at: Option<String>,
    pub merged: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    pub login: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitRef {
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
}

/// Decode `value` into `T`, or give up.
///
/// A shape mismatch anywhere on a declared path yields `None`, the same
/// outcome as a missing field.
pub fn decode<'a, T: Deserialize<'a>>(value: &'a Value) -> Option<T> {
    T::deserialize(value).ok()
}
