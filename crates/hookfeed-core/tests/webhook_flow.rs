//! Webhook state machine tests against the in-memory event store.

use hookfeed_core::{process_webhook, EventAction, EventStore, WebhookOutcome, WebhookResponse};
use hookfeed_state::fakes::MemoryEventStore;
use serde_json::json;

fn push_body() -> Vec<u8> {
    serde_json::to_vec(&json!({
        "ref": "refs/heads/main",
        "pusher": {"name": "octocat"},
        "head_commit": {"id": "abcdef1234567", "timestamp": "2024-01-01T00:00:00Z"}
    }))
    .unwrap()
}

fn pr_body(action: &str, merged: bool) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "action": action,
        "pull_request": {
            "id": 42,
            "user": {"login": "hubot"},
            "head": {"ref": "feature"},
            "base": {"ref": "main"},
            "updated_at": "2024-06-01T00:00:00Z",
            "merged": merged
        }
    }))
    .unwrap()
}

#[tokio::test]
async fn push_is_stored() {
    let store = MemoryEventStore::new();
    let outcome = process_webhook(&store, Some("push"), &push_body()).await;

    assert!(matches!(outcome, WebhookOutcome::Stored(_)));
    assert_eq!(outcome.response(), WebhookResponse::Success);

    let events = store.list_recent(20).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].request_id, "abcdef1");
    assert_eq!(events[0].action, EventAction::Push);
}

#[tokio::test]
async fn merged_pull_request_is_stored_as_merge() {
    let store = MemoryEventStore::new();
    let outcome = process_webhook(&store, Some("pull_request"), &pr_body("closed", true)).await;

    match outcome {
        WebhookOutcome::Stored(event) => assert_eq!(event.action, EventAction::Merge),
        other => panic!("expected stored outcome, got {other:?}"),
    }
    assert_eq!(store.insert_count(), 1);
}

#[tokio::test]
async fn unmerged_close_is_ignored_without_insert() {
    let store = MemoryEventStore::new();
    let outcome = process_webhook(&store, Some("pull_request"), &pr_body("closed", false)).await;

    assert!(matches!(outcome, WebhookOutcome::Ignored));
    assert_eq!(outcome.response(), WebhookResponse::Ignored);
    assert_eq!(store.insert_count(), 0);
}

#[tokio::test]
async fn push_without_head_commit_writes_nothing() {
    let store = MemoryEventStore::new();
    let body = serde_json::to_vec(&json!({
        "ref": "refs/heads/old",
        "pusher": {"name": "octocat"},
        "deleted": true
    }))
    .unwrap();

    let outcome = process_webhook(&store, Some("push"), &body).await;
    assert!(matches!(outcome, WebhookOutcome::Ignored));
    assert_eq!(store.insert_count(), 0);
}

#[tokio::test]
async fn unknown_or_missing_tag_is_acknowledged() {
    let store = MemoryEventStore::new();

    let outcome = process_webhook(&store, Some("issues"), &push_body()).await;
    assert_eq!(outcome.response(), WebhookResponse::Acknowledged);

    let outcome = process_webhook(&store, None, &push_body()).await;
    assert_eq!(outcome.response(), WebhookResponse::Acknowledged);

    assert_eq!(store.insert_count(), 0);
}

#[tokio::test]
async fn unparseable_body_fails_before_dispatch() {
    let store = MemoryEventStore::new();

    let outcome = process_webhook(&store, Some("push"), b"{not json").await;
    assert!(outcome.is_failure());

    let outcome = process_webhook(&store, Some("ping"), b"").await;
    assert!(outcome.is_failure());
    match outcome.response() {
        WebhookResponse::Error { message } => assert!(message.starts_with("invalid JSON body")),
        other => panic!("expected error response, got {other:?}"),
    }
}

#[tokio::test]
async fn store_failure_surfaces_as_error_with_detail() {
    let store = MemoryEventStore::new();
    store.set_available(false);

    let outcome = process_webhook(&store, Some("push"), &push_body()).await;
    assert!(outcome.is_failure());
    assert_eq!(
        outcome.response(),
        WebhookResponse::Error {
            message: "storage unavailable: memory store marked unavailable".to_string()
        }
    );
}

#[tokio::test]
async fn retried_delivery_is_stored_twice() {
    let store = MemoryEventStore::new();
    process_webhook(&store, Some("push"), &push_body()).await;
    process_webhook(&store, Some("push"), &push_body()).await;
    assert_eq!(store.insert_count(), 2);
}
