//! Request handlers.
//!
//! Every handler answers with a JSON body and a 200 or 500 status; failures
//! never escape as rejections.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::Instrument;
use uuid::Uuid;

use hookfeed_core::{
    delivery_span, emit_events_list_failed, emit_events_listed, emit_webhook_failed,
    emit_webhook_received, process_webhook, WebhookError, WebhookResponse, RECENT_EVENTS_LIMIT,
};

use crate::AppState;

/// Header carrying the event category (`push`, `pull_request`, ...)
pub const HEADER_EVENT: &str = "X-GitHub-Event";

/// Header carrying the unique delivery GUID
pub const HEADER_DELIVERY: &str = "X-GitHub-Delivery";

const INDEX_HTML: &str = include_str!("../static/index.html");

/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `POST /webhook`
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> (StatusCode, Json<WebhookResponse>) {
    let delivery_id = header_str(&headers, HEADER_DELIVERY)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let tag = header_str(&headers, HEADER_EVENT);
    let span = delivery_span(&delivery_id);

    async move {
        emit_webhook_received(&delivery_id, tag);

        let body = match body {
            Ok(body) => body,
            Err(rejection) => {
                let err = WebhookError::UnreadableBody(rejection.body_text());
                emit_webhook_failed(&err);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(WebhookResponse::failure(&err)),
                );
            }
        };

        let outcome = process_webhook(state.store(), tag, &body).await;
        let status = if outcome.is_failure() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::OK
        };
        (status, Json(outcome.response()))
    }
    .instrument(span)
    .await
}

/// `GET /api/events`
pub async fn list_events(State(state): State<AppState>) -> Response {
    match state.store().list_recent(RECENT_EVENTS_LIMIT).await {
        Ok(events) => {
            emit_events_listed(events.len());
            Json(events).into_response()
        }
        Err(err) => {
            emit_events_list_failed(&err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
