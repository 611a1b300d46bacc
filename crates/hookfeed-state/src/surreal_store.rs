//! SurrealDB-backed EventStore implementation
//!
//! Uses `EventRow` for persistence, converting to/from `storage_traits::Event`
//! at the boundary. The row carries a derived `sort_key` next to the verbatim
//! timestamp; the key never leaves this module.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use surrealdb::engine::any::Any;
use surrealdb::opt::auth::{Database, Root};
use surrealdb::{Response, Surreal};
use tracing::{debug, info, instrument};

use crate::config::ConnectionConfig;
use crate::error::{StateError, StorageError};
use crate::migrations;
use crate::storage_traits::{Event, EventAction, EventStore, StorageResult};

/// Row shape of the `events` table
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EventRow {
    request_id: String,
    author: String,
    action: String,
    from_branch: Option<String>,
    to_branch: String,
    timestamp: String,
    sort_key: String,
}

/// Decode the first statement's rows. Execution errors reported by the
/// backend are `Unavailable`; rows that fail to deserialize are `Corrupt`.
fn take_rows(response: Response) -> StorageResult<Vec<EventRow>> {
    let mut response = response.check()?;
    response.take(0).map_err(|e| StorageError::Corrupt {
        reason: e.to_string(),
    })
}

impl EventRow {
    fn from_event(event: &Event) -> Self {
        Self {
            request_id: event.request_id.clone(),
            author: event.author.clone(),
            action: event.action.as_str().to_string(),
            from_branch: event.from_branch.clone(),
            to_branch: event.to_branch.clone(),
            timestamp: event.timestamp.clone(),
            sort_key: event.sort_key(),
        }
    }

    fn into_event(self) -> StorageResult<Event> {
        Ok(Event {
            request_id: self.request_id,
            author: self.author,
            action: self.action.parse::<EventAction>()?,
            from_branch: self.from_branch,
            to_branch: self.to_branch,
            timestamp: self.timestamp,
        })
    }
}

/// SurrealDB-backed implementation of [`EventStore`].
#[derive(Clone)]
pub struct SurrealEventStore {
    db: Surreal<Any>,
}

impl SurrealEventStore {
    /// Create an in-memory instance for testing.
    ///
    /// Connects to `mem://`, selects the default namespace/database, and runs
    /// `init_schema`.
    pub async fn in_memory() -> crate::Result<Self> {
        Self::connect(ConnectionConfig::new("mem://")).await
    }

    /// Connect using the given configuration, sign in if credentials are
    /// present, and initialize the schema.
    #[instrument(skip(config), fields(url = %config.url, namespace = %config.namespace, database = %config.database))]
    pub async fn connect(config: ConnectionConfig) -> crate::Result<Self> {
        let db = surrealdb::engine::any::connect(config.url.as_str())
            .await
            .map_err(|e| {
                StateError::Connection(format!("Failed to connect to {}: {}", config.url, e))
            })?;

        if let Some(creds) = &config.credentials {
            if creds.is_root {
                db.signin(Root {
                    username: &creds.username,
                    password: &creds.password,
                })
                .await
                .map_err(|e| StateError::Authentication(format!("Root auth failed: {e}")))?;
            } else {
                db.signin(Database {
                    namespace: &config.namespace,
                    database: &config.database,
                    username: &creds.username,
                    password: &creds.password,
                })
                .await
                .map_err(|e| StateError::Authentication(format!("DB auth failed: {e}")))?;
            }
        }

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await
            .map_err(|e| StateError::Connection(e.to_string()))?;

        migrations::init_schema(&db).await?;

        info!("SurrealEventStore connected");
        Ok(Self { db })
    }
}

#[async_trait]
impl EventStore for SurrealEventStore {
    async fn insert(&self, event: &Event) -> StorageResult<()> {
        let row = EventRow::from_event(event);
        debug!(request_id = %row.request_id, action = %row.action, "inserting event");

        self.db
            .query("CREATE events CONTENT $row")
            .bind(("row", row))
            .await?
            .check()?;

        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> StorageResult<Vec<Event>> {
        let res = self
            .db
            .query(
                "SELECT request_id, author, action, from_branch, to_branch, timestamp, sort_key \
                 FROM events ORDER BY sort_key DESC LIMIT $limit",
            )
            .bind(("limit", limit))
            .await?;

        let rows = take_rows(res)?;

        debug!(count = rows.len(), limit, "listed recent events");
        rows.into_iter().map(EventRow::into_event).collect()
    }
}
