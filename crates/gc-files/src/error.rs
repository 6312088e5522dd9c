// error.rs — Error types for the attachment subsystem.

use thiserror::Error;

/// Errors that can occur during attachment storage operations.
#[derive(Debug, Error)]
pub enum FileStoreError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },

    /// Failed to serialize/deserialize attachment metadata.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The locator does not resolve to a stored object.
    #[error("unknown storage locator: '{locator}'")]
    UnknownLocator { locator: String },

    /// A path traversal attempt was detected in a file name or locator.
    #[error("path traversal detected: '{path}'")]
    PathTraversal { path: String },
}
