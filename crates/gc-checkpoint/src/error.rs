// error.rs — Error types for the checkpoint lifecycle subsystem.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during checkpoint lifecycle operations.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// A required field was missing or empty, or a live-session answer
    /// was left unanswered.
    #[error("validation failed: {field} is required")]
    Validation { field: String },

    /// The requested checkpoint was not found.
    #[error("checkpoint not found: {0}")]
    NotFound(Uuid),

    /// Attempted to mutate a terminal-state record with data that differs
    /// from what was already recorded. Identical re-submissions are
    /// accepted idempotently and never reach this error.
    #[error("checkpoint {id} is already {status}; conflicting update rejected")]
    Conflict { id: Uuid, status: String },

    /// Invalid state transition.
    #[error("invalid transition from {from} to {to} for checkpoint {id}")]
    InvalidTransition {
        id: Uuid,
        from: String,
        to: String,
    },

    /// A storage I/O operation failed. Surfaced as-is; retry policy, if
    /// any, belongs to the caller.
    #[error("storage error at {path}: {source}")]
    Storage {
        path: String,
        source: std::io::Error,
    },

    /// Failed to serialize/deserialize checkpoint data.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A notification dispatch failed (non-fatal).
    #[error("notification error: {0}")]
    NotificationError(String),
}

impl CheckpointError {
    /// Shorthand for a missing-required-field error.
    pub fn missing(field: &str) -> Self {
        CheckpointError::Validation {
            field: field.to_string(),
        }
    }
}
