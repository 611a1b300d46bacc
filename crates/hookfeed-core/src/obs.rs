//! Structured observability hooks for webhook deliveries.
//!
//! This module provides:
//! - Delivery-scoped tracing spans via `delivery_span`
//! - Emission functions for each terminal outcome of a delivery and for
//!   feed reads
//!
//! Events are emitted at `info!` level, failures at `warn!`. Filtering
//! follows `RUST_LOG`.

use tracing::{info, warn, Span};

use hookfeed_state::Event;

/// Logged in place of the event-type tag when a delivery carries none.
const MISSING_TAG: &str = "<none>";

/// Delivery-scoped tracing span.
///
/// Attach it to the request future with `tracing::Instrument`.
///
/// # Example
///
/// ```ignore
/// process_webhook(store, tag, body)
///     .instrument(delivery_span("72d3162e-cc78-11e3-81ab-4c9367dc0958"))
///     .await;
/// // Every log line in the future carries delivery = 72d3162e-...
/// ```
pub fn delivery_span(delivery_id: &str) -> Span {
    tracing::info_span!("hookfeed.delivery", delivery = %delivery_id)
}

/// Emit event: a delivery arrived with the given event-type tag.
pub fn emit_webhook_received(delivery_id: &str, tag: Option<&str>) {
    info!(
        event = "webhook.received",
        delivery = %delivery_id,
        tag = tag.unwrap_or(MISSING_TAG),
    );
}

/// Emit event: unrecognised category, acknowledged without storing.
pub fn emit_webhook_acknowledged(tag: Option<&str>) {
    info!(event = "webhook.acknowledged", tag = tag.unwrap_or(MISSING_TAG));
}

/// Emit event: recognised category but no event was produced.
pub fn emit_webhook_ignored(tag: Option<&str>) {
    info!(event = "webhook.ignored", tag = tag.unwrap_or(MISSING_TAG));
}

/// Emit event: a normalized event was stored.
pub fn emit_webhook_stored(event: &Event) {
    info!(
        event = "webhook.stored",
        request_id = %event.request_id,
        action = %event.action,
        to_branch = %event.to_branch,
    );
}

/// Emit event: delivery failed (warning level).
pub fn emit_webhook_failed(error: &dyn std::fmt::Display) {
    warn!(event = "webhook.failed", error = %error);
}

/// Emit event: the recent-events feed was served.
pub fn emit_events_listed(count: usize) {
    info!(event = "events.listed", count = count);
}

/// Emit event: the recent-events feed could not be read (warning level).
pub fn emit_events_list_failed(error: &dyn std::fmt::Display) {
    warn!(event = "events.list_failed", error = %error);
}
