// file.rs — CheckpointFile: metadata for one attachment.
//
// Attachments are created only during the goal-definition stage and are
// never mutated afterwards — they are read back for display. The bytes
// themselves live behind an ObjectStore; this record carries only opaque
// metadata about them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata for one file attached to a checkpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckpointFile {
    /// Unique identifier for this attachment.
    pub id: Uuid,

    /// The checkpoint this file belongs to.
    pub checkpoint_id: Uuid,

    /// Original file name as uploaded.
    pub file_name: String,

    /// Size in bytes.
    pub file_size: u64,

    /// MIME type.
    pub file_type: String,

    /// Opaque storage locator, resolvable via the ObjectStore that
    /// produced it.
    pub storage_path: String,

    /// When the file was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

impl CheckpointFile {
    /// Build a metadata record for a freshly stored file.
    pub fn new(
        checkpoint_id: Uuid,
        file_name: impl Into<String>,
        file_size: u64,
        file_type: impl Into<String>,
        storage_path: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            checkpoint_id,
            file_name: file_name.into(),
            file_size,
            file_type: file_type.into(),
            storage_path: storage_path.into(),
            uploaded_at: Utc::now(),
        }
    }
}

/// Guess a MIME type from a file name's extension.
///
/// Covers the document types the workflow actually sees (BI exports,
/// planning docs, screenshots); everything else is an octet stream.
pub fn mime_for_name(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("csv") => "text/csv",
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}
