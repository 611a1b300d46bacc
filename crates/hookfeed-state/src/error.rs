//! Error types for hookfeed-state

use thiserror::Error;

/// Errors raised while setting up the persistence layer
#[derive(Error, Debug)]
pub enum StateError {
    /// Database connection error
    #[error("Database connection failed: {0}")]
    Connection(String),

    /// Authentication against the database failed
    #[error("Database authentication failed: {0}")]
    Authentication(String),

    /// Schema setup error
    #[error("Schema setup failed: {0}")]
    SchemaSetup(String),
}

/// Errors returned by [`crate::EventStore`] operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backend could not be reached or rejected the operation.
    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },

    /// A stored row could not be decoded back into an event.
    #[error("corrupt event record: {reason}")]
    Corrupt { reason: String },
}

impl StorageError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        StorageError::Unavailable {
            reason: reason.into(),
        }
    }
}

impl From<surrealdb::Error> for StorageError {
    fn from(err: surrealdb::Error) -> Self {
        StorageError::unavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_display_carries_reason() {
        let err = StorageError::unavailable("connection refused");
        assert_eq!(err.to_string(), "storage unavailable: connection refused");
    }

    #[test]
    fn corrupt_display_carries_reason() {
        let err = StorageError::Corrupt {
            reason: "unknown event action: FORK".to_string(),
        };
        assert!(err.to_string().contains("FORK"));
    }
}
