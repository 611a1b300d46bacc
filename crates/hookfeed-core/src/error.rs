//! Error taxonomy for webhook processing.

use hookfeed_state::StorageError;

/// Why a webhook delivery could not be processed.
///
/// The `Display` text is what the sender sees as the error `message`.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("unreadable request body: {0}")]
    UnreadableBody(String),

    #[error("{0}")]
    Storage(#[from] StorageError),
}
