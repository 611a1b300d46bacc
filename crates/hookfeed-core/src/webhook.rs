//! Per-delivery webhook state machine.
//!
//! ```text
//! body ──parse──▶ tag ──dispatch──▶ normalize ──▶ store.insert
//!   │              │                   │              │
//!   ▼              ▼                   ▼              ▼
//! Failed      Acknowledged          Ignored     Stored | Failed
//! ```
//!
//! Every path ends in a [`WebhookOutcome`]; nothing here panics or
//! propagates an error to the caller.

use serde::Serialize;
use serde_json::Value;

use hookfeed_state::{Event, EventStore};

use crate::error::WebhookError;
use crate::normalize::{normalize, WebhookKind};
use crate::obs;

/// Terminal state of one webhook delivery.
#[derive(Debug)]
pub enum WebhookOutcome {
    /// The event category is not one we store.
    Acknowledged,
    /// Recognised category, but the payload produced no event.
    Ignored,
    /// The event was normalized and stored.
    Stored(Event),
    /// The body could not be parsed or the store failed.
    Failed(WebhookError),
}

impl WebhookOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, WebhookOutcome::Failed(_))
    }

    /// Wire body returned to the sender.
    pub fn response(&self) -> WebhookResponse {
        match self {
            WebhookOutcome::Acknowledged => WebhookResponse::Acknowledged,
            WebhookOutcome::Ignored => WebhookResponse::Ignored,
            WebhookOutcome::Stored(_) => WebhookResponse::Success,
            WebhookOutcome::Failed(err) => WebhookResponse::Error {
                message: err.to_string(),
            },
        }
    }
}

/// JSON body of a `/webhook` response, tagged on `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WebhookResponse {
    Acknowledged,
    Ignored,
    Success,
    Error { message: String },
}

impl WebhookResponse {
    pub fn failure(err: &WebhookError) -> Self {
        WebhookResponse::Error {
            message: err.to_string(),
        }
    }
}

/// Process one webhook delivery against `store`.
///
/// The body is parsed before the tag is inspected, so an unparseable body
/// fails even for categories that would otherwise be acknowledged.
pub async fn process_webhook(
    store: &dyn EventStore,
    event_tag: Option<&str>,
    body: &[u8],
) -> WebhookOutcome {
    let outcome = run(store, event_tag, body).await;
    match &outcome {
        WebhookOutcome::Acknowledged => obs::emit_webhook_acknowledged(event_tag),
        WebhookOutcome::Ignored => obs::emit_webhook_ignored(event_tag),
        WebhookOutcome::Stored(event) => obs::emit_webhook_stored(event),
        WebhookOutcome::Failed(err) => obs::emit_webhook_failed(err),
    }
    outcome
}

async fn run(store: &dyn EventStore, event_tag: Option<&str>, body: &[u8]) -> WebhookOutcome {
    let payload: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(err) => return WebhookOutcome::Failed(err.into()),
    };

    let Some(kind) = event_tag.and_then(WebhookKind::from_header) else {
        return WebhookOutcome::Acknowledged;
    };

    let Some(event) = normalize(kind, &payload) else {
        return WebhookOutcome::Ignored;
    };

    match store.insert(&event).await {
        Ok(()) => WebhookOutcome::Stored(event),
        Err(err) => WebhookOutcome::Failed(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookfeed_state::StorageError;

    #[test]
    fn responses_serialize_status_tag() {
        let json = serde_json::to_value(WebhookResponse::Acknowledged).unwrap();
        assert_eq!(json, serde_json::json!({"status": "acknowledged"}));

        let json = serde_json::to_value(WebhookResponse::Success).unwrap();
        assert_eq!(json, serde_json::json!({"status": "success"}));

        let json = serde_json::to_value(WebhookResponse::Error {
            message: "boom".to_string(),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "error", "message": "boom"})
        );
    }

    #[test]
    fn only_failed_is_failure() {
        assert!(!WebhookOutcome::Acknowledged.is_failure());
        assert!(!WebhookOutcome::Ignored.is_failure());
        let failed = WebhookOutcome::Failed(StorageError::unavailable("down").into());
        assert!(failed.is_failure());
        assert_eq!(
            failed.response(),
            WebhookResponse::Error {
                message: "storage unavailable: down".to_string()
            }
        );
    }
}
