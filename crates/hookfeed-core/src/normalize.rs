//! Event normalizer: provider payload → canonical [`Event`].
//!
//! Pure functions, no I/O. A payload missing any required field yields
//! `None` rather than an error.

use serde_json::Value;

use hookfeed_state::{Event, EventAction};

use crate::payload::{decode, PullRequestPayload, PushPayload};

/// Length of the short commit hash used as a push's `request_id`.
const SHORT_HASH_LEN: usize = 7;

/// Webhook categories this service stores, keyed by the `X-GitHub-Event` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookKind {
    Push,
    PullRequest,
}

impl WebhookKind {
    /// Map an event-type tag to a kind; `None` for every other tag.
    pub fn from_header(tag: &str) -> Option<Self> {
        match tag {
            "push" => Some(WebhookKind::Push),
            "pull_request" => Some(WebhookKind::PullRequest),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WebhookKind::Push => "push",
            WebhookKind::PullRequest => "pull_request",
        }
    }
}

/// Normalize a payload of the given kind.
pub fn normalize(kind: WebhookKind, payload: &Value) -> Option<Event> {
    match kind {
        WebhookKind::Push => normalize_push(payload),
        WebhookKind::PullRequest => normalize_pull_request(payload),
    }
}

/// Normalize a `push` payload.
///
/// Requires `pusher.name`, `ref`, `head_commit.id` and `head_commit.timestamp`.
/// Pushes without a head commit (branch deletions) produce no event.
pub fn normalize_push(payload: &Value) -> Option<Event> {
    let push: PushPayload = decode(payload)?;
    let author = push.pusher?.name?;
    let git_ref = push.git_ref?;
    let head = push.head_commit?;
    let timestamp = head.timestamp?;
    let commit_id = head.id?;

    Some(Event {
        request_id: short_hash(&commit_id),
        author,
        action: EventAction::Push,
        from_branch: None,
        to_branch: branch_from_ref(&git_ref).to_string(),
        timestamp,
    })
}

/// Normalize a `pull_request` payload.
///
/// `opened` becomes `PULL_REQUEST`, `closed` with `merged: true` becomes
/// `MERGE`; every other sub-action produces no event.
pub fn normalize_pull_request(payload: &Value) -> Option<Event> {
    let payload: PullRequestPayload = decode(payload)?;
    let pr = payload.pull_request?;

    let action = match payload.action?.as_str() {
        "opened" => EventAction::PullRequest,
        "closed" if pr.merged == Some(true) => EventAction::Merge,
        _ => return None,
    };

    Some(Event {
        request_id: pr.id?.to_string(),
        author: pr.user?.login?,
        action,
        from_branch: Some(pr.head?.git_ref?),
        to_branch: pr.base?.git_ref?,
        timestamp: pr.updated_at?,
    })
}

/// Text after the last `/` of a ref, or the whole ref when it has none.
fn branch_from_ref(git_ref: &str) -> &str {
    git_ref.rsplit('/').next().unwrap_or(git_ref)
}

/// First seven characters of a commit id, or all of it when shorter.
fn short_hash(commit_id: &str) -> String {
    commit_id.chars().take(SHORT_HASH_LEN).collect()
}
