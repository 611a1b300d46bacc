//! hookfeed Core Library
//!
//! Turns GitHub webhook deliveries into canonical [`Event`] records and
//! drives them into an [`EventStore`].
//!
//! - [`payload`]: typed schemas for the provider payloads
//! - [`normalize`]: payload → `Option<Event>`
//! - [`webhook`]: the per-delivery state machine

pub mod error;
pub mod normalize;
pub mod obs;
pub mod payload;
pub mod telemetry;
pub mod webhook;

pub use error::WebhookError;
pub use normalize::{normalize, normalize_pull_request, normalize_push, WebhookKind};
pub use obs::{
    delivery_span, emit_events_list_failed, emit_events_listed, emit_webhook_acknowledged,
    emit_webhook_failed, emit_webhook_ignored, emit_webhook_received, emit_webhook_stored,
};
pub use telemetry::{init_tracing, LogFormat};
pub use webhook::{process_webhook, WebhookOutcome, WebhookResponse};

pub use hookfeed_state::{Event, EventAction, EventStore, StorageError, RECENT_EVENTS_LIMIT};
