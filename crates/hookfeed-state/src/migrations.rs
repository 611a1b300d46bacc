//! SurrealDB schema migrations and initialization
//!
//! Sets up the `events` table with its permissions and ordering index.

use crate::error::StateError;
use crate::Result;
use surrealdb::engine::any::Any;
use surrealdb::Surreal;
use tracing::{debug, info};

/// Initialize all hookfeed tables in SurrealDB
///
/// Called on every connection. Safe to call multiple times (idempotent).
pub async fn init_schema(db: &Surreal<Any>) -> Result<()> {
    info!("Initializing hookfeed SurrealDB schema");
    init_events_table(db).await?;
    info!("hookfeed schema initialization complete");
    Ok(())
}

/// Initialize `events` table
///
/// Schema:
/// ```text
/// TABLE events {
///   request_id:   STRING
///   author:       STRING
///   action:       STRING (enum: PUSH | PULL_REQUEST | MERGE)
///   from_branch:  STRING?
///   to_branch:    STRING
///   timestamp:    STRING (verbatim from the provider)
///   sort_key:     STRING (indexed, UTC-normalized timestamp)
/// }
/// ```
///
/// Records are append-only: update and delete are denied.
async fn init_events_table(db: &Surreal<Any>) -> Result<()> {
    debug!("Initializing events table");

    let sql = r#"
        DEFINE TABLE IF NOT EXISTS events
            SCHEMALESS
            PERMISSIONS
                FOR select, create FULL
                FOR update, delete NONE;

        -- Index sort_key for the recent-first feed query
        DEFINE INDEX IF NOT EXISTS idx_sort_key ON TABLE events COLUMNS sort_key;
    "#;

    db.query(sql)
        .await
        .and_then(|res| res.check())
        .map_err(|e| StateError::SchemaSetup(e.to_string()))?;
    info!("events table initialized");
    Ok(())
}
