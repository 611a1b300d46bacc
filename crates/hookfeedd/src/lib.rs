//! hookfeedd - HTTP surface for the hookfeed webhook feed
//!
//! Routes:
//! - `POST /webhook`: receive a GitHub delivery
//! - `GET /api/events`: the 20 most recent events, newest first
//! - `GET /`: static dashboard polling `/api/events`

pub mod config;
pub mod routes;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use hookfeed_core::EventStore;

/// Shared state handed to every request.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn EventStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn EventStore {
        self.store.as_ref()
    }
}

/// Build the application router.
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/webhook", post(routes::receive_webhook))
        .route("/api/events", get(routes::list_events))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
