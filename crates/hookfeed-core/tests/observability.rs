//! Observability tests for webhook delivery tracing.
//!
//! These tests verify that each terminal outcome of a delivery emits its
//! structured lifecycle event.

use hookfeed_core::{
    delivery_span, emit_events_list_failed, emit_events_listed, emit_webhook_received,
    process_webhook, StorageError,
};
use hookfeed_state::fakes::MemoryEventStore;
use tracing::Instrument;
use tracing_test::traced_test;

#[traced_test]
#[test]
fn received_event_carries_delivery_and_tag() {
    emit_webhook_received("delivery-123", Some("push"));

    assert!(logs_contain("webhook.received"));
    assert!(logs_contain("delivery-123"));
    assert!(logs_contain("push"));
}

#[traced_test]
#[test]
fn received_event_without_tag() {
    emit_webhook_received("delivery-456", None);
    assert!(logs_contain("<none>"));
}

#[traced_test]
#[test]
fn listed_event_carries_count() {
    emit_events_listed(7);
    assert!(logs_contain("events.listed"));
    assert!(logs_contain("count=7"));
}

#[traced_test]
#[test]
fn delivery_span_tags_nested_events() {
    delivery_span("delivery-span").in_scope(|| emit_events_listed(0));
    assert!(logs_contain("delivery-span"));
}

#[tokio::test]
#[traced_test]
async fn delivery_span_instruments_processing() {
    let store = MemoryEventStore::new();
    process_webhook(&store, Some("issues"), b"{}")
        .instrument(delivery_span("delivery-789"))
        .await;

    assert!(logs_contain("delivery-789"));
    assert!(logs_contain("webhook.acknowledged"));
}

#[tokio::test]
#[traced_test]
async fn stored_push_logs_request_id() {
    let store = MemoryEventStore::new();
    let body = br#"{"ref":"refs/heads/main","pusher":{"name":"octocat"},"head_commit":{"id":"abcdef1234567","timestamp":"2024-01-01T00:00:00Z"}}"#;

    process_webhook(&store, Some("push"), body).await;

    assert!(logs_contain("webhook.stored"));
    assert!(logs_contain("abcdef1"));
}

#[tokio::test]
#[traced_test]
async fn ignored_and_acknowledged_are_logged() {
    let store = MemoryEventStore::new();

    process_webhook(&store, Some("push"), br#"{"ref":"refs/heads/x"}"#).await;
    process_webhook(&store, Some("issues"), b"{}").await;

    assert!(logs_contain("webhook.ignored"));
    assert!(logs_contain("webhook.acknowledged"));
}

#[tokio::test]
#[traced_test]
async fn failure_is_logged_as_warning() {
    let store = MemoryEventStore::new();
    process_webhook(&store, Some("push"), b"not json").await;

    assert!(logs_contain("webhook.failed"));
    assert!(logs_contain("WARN"));
}

#[tokio::test]
#[traced_test]
async fn missing_tag_uses_placeholder_when_acknowledged() {
    let store = MemoryEventStore::new();
    process_webhook(&store, None, b"{}").await;

    assert!(logs_contain("webhook.acknowledged"));
    assert!(logs_contain("<none>"));
}

#[traced_test]
#[test]
fn list_failure_is_logged_as_warning() {
    emit_events_list_failed(&StorageError::unavailable("connection refused"));

    assert!(logs_contain("events.list_failed"));
    assert!(logs_contain("connection refused"));
    assert!(logs_contain("WARN"));
}
