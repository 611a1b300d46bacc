//! hookfeed-state: SurrealDB Backend for hookfeed
//!
//! This crate provides the persistence layer for the webhook activity feed.
//! It owns the canonical [`Event`] record and all I/O with SurrealDB.
//!
//! ## Layer 0 - Data/Persistence
//!
//! Focus: append-only storage and the bounded "most recent" query.
//!
//! ## Key Components
//!
//! - `EventStore`: Backend-agnostic trait (insert / list_recent)
//! - `SurrealEventStore`: SurrealDB implementation
//! - `MemoryEventStore`: In-memory fake for tests (`fakes` module)
//! - `ConnectionConfig`: Where and how to connect

mod config;
mod error;
pub mod fakes;
mod migrations;
pub mod storage_traits;
pub mod surreal_store;

pub use config::{ConnectionConfig, Credentials};
pub use error::{StateError, StorageError};
pub use storage_traits::{
    sort_key, Event, EventAction, EventStore, StorageResult, RECENT_EVENTS_LIMIT,
};
pub use surreal_store::SurrealEventStore;

/// Result type for hookfeed-state setup operations
pub type Result<T> = std::result::Result<T, StateError>;
