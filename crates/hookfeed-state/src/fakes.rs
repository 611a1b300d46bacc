//! In-memory fakes for storage traits (testing only)
//!
//! Provides `MemoryEventStore`, which satisfies the `EventStore` contract
//! without any external dependencies and can simulate a backend outage.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::StorageError;
use crate::storage_traits::*;

// ---------------------------------------------------------------------------
// MemoryEventStore
// ---------------------------------------------------------------------------

/// In-memory event store backed by a `Vec<Event>` in insertion order.
#[derive(Debug)]
pub struct MemoryEventStore {
    events: Mutex<Vec<Event>>,
    available: AtomicBool,
}

impl Default for MemoryEventStore {
    fn default() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle simulated availability. While unavailable, every operation
    /// fails with `StorageError::Unavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of events inserted so far.
    pub fn insert_count(&self) -> usize {
        self.lock().len()
    }

    fn check_available(&self) -> StorageResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StorageError::unavailable("memory store marked unavailable"))
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Event>> {
        // Events are immutable once pushed, so a poisoned guard is still consistent.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn insert(&self, event: &Event) -> StorageResult<()> {
        self.check_available()?;
        self.lock().push(event.clone());
        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> StorageResult<Vec<Event>> {
        self.check_available()?;
        let events = self.lock();
        // Newest insert first among equal keys.
        let mut keyed: Vec<(String, &Event)> =
            events.iter().rev().map(|e| (e.sort_key(), e)).collect();
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(keyed
            .into_iter()
            .take(limit)
            .map(|(_, e)| e.clone())
            .collect())
    }
}
